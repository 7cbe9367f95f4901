//! Minimal in-memory fonts for tests.
//!
//! Each font carries just enough for `ttf-parser` to accept it: `head`,
//! `hhea`, `maxp`, plus the `OS/2` and `name` tables the pipeline reads.

use std::fs;
use std::path::{Path, PathBuf};
use write_fonts::types::Tag;
use write_fonts::FontBuilder;

const PLATFORM_MACINTOSH: u16 = 1;
const PLATFORM_WINDOWS: u16 = 3;
const WINDOWS_UNICODE_BMP: u16 = 1;
const WINDOWS_EN_US: u16 = 0x0409;

const OS2_WEIGHT_CLASS: usize = 4;
const OS2_WIDTH_CLASS: usize = 6;
const OS2_FS_SELECTION: usize = 62;
const OS2_V4_LEN: usize = 96;

#[derive(Debug, Clone)]
struct RawName {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub(crate) struct TestFont {
    names: Vec<RawName>,
    weight_class: Option<u16>,
    italic: bool,
}

impl TestFont {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            weight_class: Some(400),
            italic: false,
        }
    }

    /// A typical family member: typographic family, version and weight
    pub fn member(family: &str, version: &str, weight_class: u16) -> Self {
        Self::new()
            .legacy_family(family)
            .typographic_family(family)
            .version(version)
            .weight(weight_class)
    }

    pub fn typographic_family(self, name: &str) -> Self {
        self.name(16, name)
    }

    pub fn legacy_family(self, name: &str) -> Self {
        self.name(1, name)
    }

    pub fn version(self, version: &str) -> Self {
        self.name(5, version)
    }

    /// Windows Unicode entry, UTF-16BE encoded
    pub fn name(mut self, name_id: u16, text: &str) -> Self {
        let bytes = text.encode_utf16().flat_map(u16::to_be_bytes).collect();
        self.names.push(RawName {
            platform_id: PLATFORM_WINDOWS,
            encoding_id: WINDOWS_UNICODE_BMP,
            language_id: WINDOWS_EN_US,
            name_id,
            bytes,
        });
        self
    }

    /// Macintosh Roman entry with raw bytes
    pub fn mac_name(mut self, name_id: u16, bytes: &[u8]) -> Self {
        self.names.push(RawName {
            platform_id: PLATFORM_MACINTOSH,
            encoding_id: 0,
            language_id: 0,
            name_id,
            bytes: bytes.to_vec(),
        });
        self
    }

    pub fn weight(mut self, weight_class: u16) -> Self {
        self.weight_class = Some(weight_class);
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn without_os2(mut self) -> Self {
        self.weight_class = None;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut builder = FontBuilder::new();
        builder
            .add_raw(Tag::new(b"head"), head_table())
            .add_raw(Tag::new(b"hhea"), hhea_table())
            .add_raw(Tag::new(b"maxp"), maxp_table())
            .add_raw(Tag::new(b"name"), self.name_table());
        if let Some(weight_class) = self.weight_class {
            builder.add_raw(Tag::new(b"OS/2"), os2_table(weight_class, self.italic));
        }
        builder.build()
    }

    /// Write the font into `dir` and return its path
    pub fn write(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        fs::write(&path, self.build()).expect("write test font");
        path
    }

    fn name_table(&self) -> Vec<u8> {
        let count = self.names.len() as u16;
        let storage_offset = 6 + 12 * count;

        let mut table = Vec::new();
        let mut storage = Vec::new();
        push_u16(&mut table, 0);
        push_u16(&mut table, count);
        push_u16(&mut table, storage_offset);
        for name in &self.names {
            push_u16(&mut table, name.platform_id);
            push_u16(&mut table, name.encoding_id);
            push_u16(&mut table, name.language_id);
            push_u16(&mut table, name.name_id);
            push_u16(&mut table, name.bytes.len() as u16);
            push_u16(&mut table, storage.len() as u16);
            storage.extend_from_slice(&name.bytes);
        }
        table.extend_from_slice(&storage);
        table
    }
}

fn push_u16(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_be_bytes());
}

fn head_table() -> Vec<u8> {
    let mut table = Vec::with_capacity(54);
    push_u32(&mut table, 0x0001_0000); // version
    push_u32(&mut table, 0x0001_0000); // fontRevision
    push_u32(&mut table, 0); // checksumAdjustment
    push_u32(&mut table, 0x5F0F_3CF5); // magicNumber
    push_u16(&mut table, 0); // flags
    push_u16(&mut table, 1000); // unitsPerEm
    table.extend_from_slice(&[0; 16]); // created, modified
    table.extend_from_slice(&[0; 8]); // bounding box
    push_u16(&mut table, 0); // macStyle
    push_u16(&mut table, 8); // lowestRecPPEM
    push_u16(&mut table, 2); // fontDirectionHint
    push_u16(&mut table, 0); // indexToLocFormat
    push_u16(&mut table, 0); // glyphDataFormat
    table
}

fn hhea_table() -> Vec<u8> {
    let mut table = Vec::with_capacity(36);
    push_u32(&mut table, 0x0001_0000);
    push_u16(&mut table, 800); // ascender
    push_u16(&mut table, (-200i16) as u16); // descender
    table.extend_from_slice(&[0; 26]);
    push_u16(&mut table, 1); // numberOfHMetrics
    table
}

fn maxp_table() -> Vec<u8> {
    let mut table = Vec::with_capacity(6);
    push_u32(&mut table, 0x0000_5000);
    push_u16(&mut table, 1);
    table
}

fn os2_table(weight_class: u16, italic: bool) -> Vec<u8> {
    let mut table = vec![0; OS2_V4_LEN];
    let mut put = |offset: usize, value: u16| {
        table[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
    };
    put(0, 4);
    put(OS2_WEIGHT_CLASS, weight_class);
    put(OS2_WIDTH_CLASS, 5);
    put(OS2_FS_SELECTION, if italic { 0x0001 } else { 0x0040 });
    table
}
