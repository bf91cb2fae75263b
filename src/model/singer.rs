/// One row of the `Sing` sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Singer {
    /// Normalized singer id (join key for the song singer slots)
    pub id: String,

    /// Primary display name (`Sing`)
    pub name: String,

    /// Name in its original script (`OriginalSing`)
    pub original_name: String,

    /// Romanized name (`RomanSing`)
    pub romanized_name: String,

    /// Phonetic search key (`PYStr`)
    pub phonetic: String,

    /// Country code used for the singer-type lookup (`SingCountry`)
    pub country: String,

    /// Sex code used for the singer-type lookup (`SingSex`)
    pub sex: String,
}
