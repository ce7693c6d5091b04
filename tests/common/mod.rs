use std::io::Write;

use assert_fs::TempDir;
use assert_fs::prelude::*;
use flate2::Compression;
use flate2::write::GzEncoder;

/// Gzip `payload` and write it as `name` inside `dir`.
pub fn write_map(dir: &TempDir, name: &str, payload: &[u8]) {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(payload).unwrap();
    let bytes = enc.finish().unwrap();
    dir.child(name).write_binary(&bytes).unwrap();
}

/// Builds a fixture map directory:
/// maps/
///   huge.map      (size code 0xB4 = H)
///   small.map     (size code 0x24 = S)
///   nomarker.map  (no 0x01 anywhere in the header)
///   plain.txt     (not a gzip file)
pub fn basic_maps() -> TempDir {
    let td = TempDir::new().unwrap();
    write_map(&td, "huge.map", &[0x00, 0x01, 0xB4, 0x33, 0x33]);
    write_map(&td, "small.map", &[0x00, 0x01, 0x24, 0x33, 0x33]);
    write_map(&td, "nomarker.map", &[0u8; 30]);
    td.child("plain.txt").write_str("not a gzip file").unwrap();
    td
}

pub fn locator_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("map-locator").unwrap()
}
