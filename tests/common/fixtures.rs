//! Static log corpora and on-disk fixture generators.

use std::path::{Path, PathBuf};

/// Lines in the shape the sensor daemon actually writes.
pub const CORPUS_DAEMON: &[&str] = &[
    "[20240115_100000] ALERT: INTRUDER | Temp: 21.4C | Humidity: 44.0% | Distance: 62.5cm | Image: /alerts/INTRUDER_20240115_100000.jpg",
    "[20240115_100512] ALERT: FIRE | Temp: 57.9C | Humidity: 18.5% | Distance: 240.0cm | Image: /alerts/FIRE_20240115_100512.jpg",
    "[20240115_101030] ALERT: INTRUDER | Temp: 22.0C | Humidity: 43.1% | Distance: 35.2cm | Image: /alerts/INTRUDER_20240115_101030.jpg",
    "[20240115_101544] ALERT: FIRE | Temp: 61.3C | Humidity: 15.0% | Distance: 238.7cm | Image: /alerts/FIRE_20240115_101544.jpg",
];

/// Lines in the compact shape, marker inside the brackets.
pub const CORPUS_COMPACT: &[&str] = &[
    "[12:00:00 FIRE] | Temp:45.5C | Humidity:30.0% | Distance:120.0cm",
    "[12:01:00] | Temp:24.0C | Humidity:51.0% | Distance:80.0cm",
    "[12:02:00] | Temp:24.2C | Humidity:50.5% | Distance:12.0cm",
];

/// Lines that must never produce an event.
pub const CORPUS_MALFORMED: &[&str] = &[
    "",
    "daemon started",
    "[12:00:00] Temp:45.5C Humidity:30.0% Distance:120.0cm",
    "12:00:00 FIRE | Temp:45.5C | Humidity:30.0% | Distance:120.0cm",
    "[12:00:00 FIRE | Temp:45.5C | Humidity:30.0% | Distance:120.0cm",
    "[12:00:00] | Temp:hotC | Humidity:30.0% | Distance:120.0cm",
    "[12:00:00] | Temp:45.5C | Humidity:n/a% | Distance:120.0cm",
    "[12:00:00] | Temp:45.5C | Humidity:30.0% | Distance:far",
    "[12:00:00] | Temp:45.5C | Humidity:30.0%",
    "[20240115_102000] ALERT: FIRE | Temp: 6",
];

/// Write `lines` to `dir/events.log`, newline-terminated, and return the path.
pub fn write_log(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("events.log");
    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(&path, content).expect("write fixture log");
    path
}

/// Write a real, decodable JPEG. The noisy pattern keeps the encoded file
/// well above the corrupt-capture threshold.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            (x * 7 + y * 13) as u8,
            ((x * 31) ^ (y * 17)) as u8,
            (x * y % 251) as u8,
        ])
    });
    img.save(path).expect("encode fixture jpeg");
}

/// Create `dir` and put a valid 96x64 JPEG in it for every name.
pub fn write_captures(dir: &Path, names: &[&str]) {
    std::fs::create_dir_all(dir).expect("create capture dir");
    for name in names {
        write_jpeg(&dir.join(name), 96, 64);
    }
}

/// A config file pointing at `log` and `captures`, for running the binary.
pub fn write_config(dir: &Path, log: &Path, captures: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    let body = format!(
        "[sources]\nlog_file = {:?}\ncaptures_dir = {:?}\n",
        log.display().to_string(),
        captures.display().to_string(),
    );
    std::fs::write(&path, body).expect("write fixture config");
    path
}
