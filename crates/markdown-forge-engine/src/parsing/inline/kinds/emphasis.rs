/// Bold and italic delimiters.
///
/// `BOLD` must be split out before `ITALIC`, otherwise each `**` reads as two
/// empty italic runs.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "*";
}
