#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub strength: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub digits: bool,
    pub symbols: bool,
    pub all: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}
