use chrono::Local;

/// `chrono` format of the prefix put in front of every logged line
pub const TIMESTAMP_FORMAT: &str = "%y-%m-%d %H:%M:%S : ";

/// Current local time as a line prefix, e.g. `26-10-19 14:03:07 : `.
/// Read from the clock on every call.
pub fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Prefix `message` with the current timestamp
pub fn stamp(message: &str) -> String {
    format!("{}{}", timestamp(), message)
}
