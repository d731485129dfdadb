//! Shared helpers for integration tests.
//!
//! No font files ship with the repository, so tests build a minimal TrueType
//! font in memory: `head`, `hhea`, `maxp`, `cmap` (format 12), `hmtx`,
//! `loca` (long offsets), `glyf` (one rectangle per glyph) and `kern`
//! (format 0). That is enough for ttf-parser to map characters, report
//! advances and kerning, and decode outlines.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const UNITS_PER_EM: u16 = 1000;

/// Glyph box as `[x_min, y_min, x_max, y_max]` in design units.
pub type GlyphBox = [i16; 4];

struct TestGlyph {
    ch: Option<char>,
    advance: u16,
    outline: Option<GlyphBox>,
    /// Stop the `glyf` record right after the instruction length.
    truncated: bool,
}

/// Builds the bytes of a synthetic TrueType font.
pub struct TestFontBuilder {
    units_per_em: u16,
    glyphs: Vec<TestGlyph>,
    kerning: Vec<(char, char, i16)>,
}

impl TestFontBuilder {
    /// Starts a font with a `.notdef` glyph (advance 500, a box) at index 0.
    pub fn new(units_per_em: u16) -> Self {
        Self {
            units_per_em,
            glyphs: vec![TestGlyph {
                ch: None,
                advance: 500,
                outline: Some([50, 0, 450, 700]),
                truncated: false,
            }],
            kerning: Vec::new(),
        }
    }

    /// Adds a glyph for `ch`. `outline: None` makes a glyph without contours.
    pub fn glyph(mut self, ch: char, advance: u16, outline: Option<GlyphBox>) -> Self {
        self.glyphs.push(TestGlyph {
            ch: Some(ch),
            advance,
            outline,
            truncated: false,
        });
        self
    }

    /// Adds a glyph for `ch` whose `glyf` record has a header but no point
    /// data, so the outline cannot be decoded.
    pub fn truncated_glyph(mut self, ch: char, advance: u16, outline: GlyphBox) -> Self {
        self.glyphs.push(TestGlyph {
            ch: Some(ch),
            advance,
            outline: Some(outline),
            truncated: true,
        });
        self
    }

    pub fn kern(mut self, left: char, right: char, value: i16) -> Self {
        self.kerning.push((left, right, value));
        self
    }

    fn glyph_id(&self, ch: char) -> u16 {
        self.glyphs
            .iter()
            .position(|g| g.ch == Some(ch))
            .map(|i| i as u16)
            .unwrap_or(0)
    }

    pub fn build(&self) -> Vec<u8> {
        let (glyf, loca) = self.glyf_and_loca();
        let mut tables: Vec<([u8; 4], Vec<u8>)> = vec![
            (*b"cmap", self.cmap()),
            (*b"glyf", glyf),
            (*b"head", self.head()),
            (*b"hhea", self.hhea()),
            (*b"hmtx", self.hmtx()),
            (*b"loca", loca),
            (*b"maxp", self.maxp()),
        ];
        if !self.kerning.is_empty() {
            tables.push((*b"kern", self.kern_table()));
        }
        tables.sort_by(|a, b| a.0.cmp(&b.0));
        assemble(&tables)
    }

    fn head(&self) -> Vec<u8> {
        let mut w = Writer::default();
        w.u32(0x0001_0000); // version
        w.u32(0x0001_0000); // font revision
        w.u32(0); // checksum adjustment
        w.u32(0x5F0F_3CF5); // magic
        w.u16(0); // flags
        w.u16(self.units_per_em);
        w.u64(0); // created
        w.u64(0); // modified
        w.i16(0);
        w.i16(0);
        w.i16(self.units_per_em as i16);
        w.i16(self.units_per_em as i16);
        w.u16(0); // mac style
        w.u16(8); // lowest rec ppem
        w.i16(2); // font direction hint
        w.i16(1); // long loca offsets
        w.i16(0); // glyph data format
        assert_eq!(w.0.len(), 54);
        w.0
    }

    fn hhea(&self) -> Vec<u8> {
        let mut w = Writer::default();
        w.u32(0x0001_0000);
        w.i16(800); // ascender
        w.i16(-200); // descender
        w.i16(0); // line gap
        w.u16(self.glyphs.iter().map(|g| g.advance).max().unwrap_or(0));
        w.i16(0); // min lsb
        w.i16(0); // min rsb
        w.i16(self.units_per_em as i16); // x max extent
        w.i16(1); // caret slope rise
        w.i16(0); // caret slope run
        w.i16(0); // caret offset
        for _ in 0..4 {
            w.i16(0);
        }
        w.i16(0); // metric data format
        w.u16(self.glyphs.len() as u16);
        assert_eq!(w.0.len(), 36);
        w.0
    }

    fn maxp(&self) -> Vec<u8> {
        let mut w = Writer::default();
        w.u32(0x0000_5000);
        w.u16(self.glyphs.len() as u16);
        w.0
    }

    fn hmtx(&self) -> Vec<u8> {
        let mut w = Writer::default();
        for glyph in &self.glyphs {
            w.u16(glyph.advance);
            w.i16(glyph.outline.map(|b| b[0]).unwrap_or(0));
        }
        w.0
    }

    fn cmap(&self) -> Vec<u8> {
        let mut mapped: Vec<(u32, u32)> = self
            .glyphs
            .iter()
            .enumerate()
            .filter_map(|(id, g)| g.ch.map(|ch| (u32::from(ch), id as u32)))
            .collect();
        mapped.sort();

        let mut w = Writer::default();
        w.u16(0); // version
        w.u16(1); // number of encoding records
        w.u16(3); // platform: Windows
        w.u16(10); // encoding: Unicode full repertoire
        w.u32(12); // subtable offset
        w.u16(12); // format
        w.u16(0); // reserved
        w.u32(16 + 12 * mapped.len() as u32);
        w.u32(0); // language
        w.u32(mapped.len() as u32);
        for (code, id) in mapped {
            w.u32(code);
            w.u32(code);
            w.u32(id);
        }
        w.0
    }

    fn glyf_and_loca(&self) -> (Vec<u8>, Vec<u8>) {
        let mut glyf = Writer::default();
        let mut loca = Writer::default();
        for glyph in &self.glyphs {
            loca.u32(glyf.0.len() as u32);
            if let Some([x0, y0, x1, y1]) = glyph.outline {
                glyf.i16(1); // one contour
                glyf.i16(x0);
                glyf.i16(y0);
                glyf.i16(x1);
                glyf.i16(y1);
                glyf.u16(3); // last point index
                glyf.u16(0); // no instructions
                if glyph.truncated {
                    glyf.pad4();
                    continue;
                }
                for _ in 0..4 {
                    glyf.u8(0x01); // on-curve, 16-bit deltas
                }
                for dx in [x0, x1 - x0, 0, x0 - x1] {
                    glyf.i16(dx);
                }
                for dy in [y0, 0, y1 - y0, 0] {
                    glyf.i16(dy);
                }
                glyf.pad4();
            }
        }
        loca.u32(glyf.0.len() as u32);
        (glyf.0, loca.0)
    }

    fn kern_table(&self) -> Vec<u8> {
        let mut pairs: Vec<(u16, u16, i16)> = self
            .kerning
            .iter()
            .map(|&(l, r, v)| (self.glyph_id(l), self.glyph_id(r), v))
            .collect();
        pairs.sort_by_key(|&(l, r, _)| (l, r));

        let n = pairs.len() as u16;
        let mut w = Writer::default();
        w.u16(0); // version
        w.u16(1); // number of subtables
        w.u16(0); // subtable version
        w.u16(6 + 8 + 6 * n); // subtable length
        w.u8(0); // format 0
        w.u8(0x01); // coverage: horizontal
        let (search_range, entry_selector) = search_params(n);
        w.u16(n);
        w.u16(search_range * 6);
        w.u16(entry_selector);
        w.u16(n * 6 - search_range * 6);
        for (l, r, v) in pairs {
            w.u16(l);
            w.u16(r);
            w.i16(v);
        }
        w.0
    }
}

/// Largest power of two not above `n`, and its log2.
fn search_params(n: u16) -> (u16, u16) {
    let mut range = 1u16;
    let mut selector = 0u16;
    while range * 2 <= n {
        range *= 2;
        selector += 1;
    }
    (range, selector)
}

fn assemble(tables: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    let (search_range, entry_selector) = search_params(num_tables);

    let mut w = Writer::default();
    w.u32(0x0001_0000);
    w.u16(num_tables);
    w.u16(search_range * 16);
    w.u16(entry_selector);
    w.u16(num_tables * 16 - search_range * 16);

    let mut offset = 12 + 16 * tables.len() as u32;
    for (tag, data) in tables {
        w.0.extend_from_slice(tag);
        w.u32(0); // checksum
        w.u32(offset);
        w.u32(data.len() as u32);
        offset += (data.len() as u32 + 3) & !3;
    }
    for (_, data) in tables {
        w.0.extend_from_slice(data);
        w.pad4();
    }
    w.0
}

#[derive(Default)]
struct Writer(Vec<u8>);

impl Writer {
    fn u8(&mut self, v: u8) {
        self.0.push(v);
    }
    fn u16(&mut self, v: u16) {
        self.0.extend_from_slice(&v.to_be_bytes());
    }
    fn i16(&mut self, v: i16) {
        self.0.extend_from_slice(&v.to_be_bytes());
    }
    fn u32(&mut self, v: u32) {
        self.0.extend_from_slice(&v.to_be_bytes());
    }
    fn u64(&mut self, v: u64) {
        self.0.extend_from_slice(&v.to_be_bytes());
    }
    fn pad4(&mut self) {
        while self.0.len() % 4 != 0 {
            self.0.push(0);
        }
    }
}

/// Sans-like test font: 'A', 'B', 'V', 'i', space; kerning A-V and V-A.
pub fn sans_font() -> Vec<u8> {
    TestFontBuilder::new(UNITS_PER_EM)
        .glyph('A', 600, Some([50, 0, 550, 700]))
        .glyph('B', 550, Some([60, 0, 500, 700]))
        .glyph('V', 600, Some([40, 0, 560, 700]))
        .glyph('i', 250, Some([80, 0, 170, 500]))
        .glyph(' ', 250, None)
        .kern('A', 'V', -80)
        .kern('V', 'A', -60)
        .build()
}

/// Narrower serif-like test font with no kerning table.
pub fn serif_font() -> Vec<u8> {
    TestFontBuilder::new(2048)
        .glyph('A', 1200, Some([20, 0, 1180, 1400]))
        .glyph('B', 1100, Some([100, 0, 1000, 1400]))
        .glyph('V', 1250, Some([10, 0, 1240, 1400]))
        .build()
}

/// Writes `bytes` to `<dir>/<name>.ttf`.
pub fn write_font(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(format!("{}.ttf", name));
    std::fs::write(&path, bytes).expect("write test font");
    path
}
