/// Default club set, in bag order. The list is user-configurable through
/// the `clubs` setting; these are only the out-of-the-box labels.
pub const DEFAULT_CLUBS: [&str; 17] = [
    "1W", "3W", "5W", "UT", "3I", "4I", "5I", "6I", "7I", "8I", "9I", "PW", "AW", "SW", "LW", "58",
    "PT",
];

pub fn default_clubs() -> Vec<String> {
    DEFAULT_CLUBS.iter().map(|c| c.to_string()).collect()
}
