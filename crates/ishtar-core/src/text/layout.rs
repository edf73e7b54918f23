use crate::coords::{Rect, Vec2};

use super::decode::decode_codepoint;
use super::font::FontMetrics;

/// Horizontal placement of each line inside the bounds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HAlign {
    /// Maps a style-table slot value; unknown values fall back to `Left`.
    pub fn from_style(v: u32) -> Self {
        match v {
            1 => HAlign::Center,
            2 => HAlign::Right,
            _ => HAlign::Left,
        }
    }
}

/// Vertical placement of the whole line block inside the bounds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VAlign {
    pub fn from_style(v: u32) -> Self {
        match v {
            1 => VAlign::Middle,
            2 => VAlign::Bottom,
            _ => VAlign::Top,
        }
    }
}

/// Line-breaking policy.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum WrapMode {
    /// Single line per input line, truncated with a 3-dot ellipsis.
    #[default]
    None,
    /// Break the instant the next glyph would exceed the bounds width.
    Char,
    /// Break before space-delimited runs; a run wider than the whole
    /// bounds degrades to `Char` for that run only.
    Word,
}

impl WrapMode {
    pub fn from_style(v: u32) -> Self {
        match v {
            1 => WrapMode::Char,
            2 => WrapMode::Word,
            _ => WrapMode::None,
        }
    }
}

/// Shaping parameters, typically assembled from the style table.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    /// Glyph size in pixels (metrics are scaled from the font's base size).
    pub size: f32,
    /// Fixed spacing added between consecutive glyphs.
    pub spacing: f32,
    /// Extra pixels between lines (line height is `size + line_spacing`).
    pub line_spacing: f32,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub wrap: WrapMode,
    /// Box width reserved by a leading `#NNN#` icon marker.
    pub icon_size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 10.0,
            spacing: 1.0,
            line_spacing: 5.0,
            h_align: HAlign::Left,
            v_align: VAlign::Top,
            wrap: WrapMode::None,
            icon_size: 16.0,
        }
    }
}

/// One positioned draw produced by the shaper.
///
/// Positions are the top-left of the glyph/icon box at `TextStyle::size`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TextDraw {
    Glyph { codepoint: char, pos: Vec2 },
    Icon { id: u16, pos: Vec2 },
}

/// One display line planned by the measuring pass.
#[derive(Debug, Copy, Clone)]
struct Line<'t> {
    bytes: &'t [u8],
    icon: Option<u16>,
    width: f32,
}

/// Detects a leading `#` + 1–3 decimal digits + `#` icon marker.
///
/// Returns the icon id and the remainder of the line past the marker.
fn parse_icon(bytes: &[u8]) -> (Option<u16>, &[u8]) {
    if bytes.first() != Some(&b'#') {
        return (None, bytes);
    }
    let mut digits = 0usize;
    while digits < 3 {
        match bytes.get(1 + digits) {
            Some(b) if b.is_ascii_digit() => digits += 1,
            _ => break,
        }
    }
    if digits == 0 || bytes.get(1 + digits) != Some(&b'#') {
        return (None, bytes);
    }
    let mut id = 0u16;
    for &b in &bytes[1..1 + digits] {
        id = id * 10 + (b - b'0') as u16;
    }
    (Some(id), &bytes[digits + 2..])
}

/// Joins two run widths with inter-glyph spacing, skipping the join when
/// either side is empty.
#[inline]
fn join(a: f32, b: f32, spacing: f32) -> f32 {
    if a > 0.0 && b > 0.0 { a + spacing + b } else { a + b }
}

/// Text measurement and glyph placement over a [`FontMetrics`] source.
///
/// Layouts are produced lazily and consumed immediately — nothing is
/// cached between frames. Re-shaping short UI strings every frame is part
/// of the immediate-mode contract.
pub struct TextShaper<'f> {
    font: &'f dyn FontMetrics,
}

impl<'f> TextShaper<'f> {
    pub fn new(font: &'f dyn FontMetrics) -> Self {
        Self { font }
    }

    /// Scale factor from the font's base size to the requested size.
    fn scale(&self, style: &TextStyle) -> f32 {
        let base = self.font.base_size();
        if base > 0.0 { style.size / base } else { 1.0 }
    }

    /// Effective advance of one glyph at the requested size.
    ///
    /// Zero-advance glyphs fall back to their bitmap width.
    fn glyph_advance(&self, codepoint: char, style: &TextStyle) -> f32 {
        let mut adv = self.font.advance(codepoint);
        if adv <= 0.0 {
            adv = self.font.glyph_width(codepoint);
        }
        adv * self.scale(style)
    }

    /// Width of a glyph run (no icon handling, no wrapping).
    fn run_width(&self, bytes: &[u8], style: &TextStyle) -> f32 {
        let mut w = 0.0;
        let mut rest = bytes;
        while let Some((cp, n)) = decode_codepoint(rest) {
            w = join(w, self.glyph_advance(cp, style), style.spacing);
            rest = &rest[n..];
        }
        w
    }

    /// Measure-only width of a single line, icon marker included.
    pub fn line_width(&self, line: &str, style: &TextStyle) -> f32 {
        let (icon, body) = parse_icon(line.as_bytes());
        let icon_w = if icon.is_some() { style.icon_size } else { 0.0 };
        join(icon_w, self.run_width(body, style), style.spacing)
    }

    /// Measures unwrapped text: widest line × line-block height.
    pub fn measure(&self, text: &str, style: &TextStyle) -> Vec2 {
        let mut width = 0.0f32;
        let mut count = 0usize;
        for line in text.as_bytes().split(|&b| b == b'\n') {
            let (icon, body) = parse_icon(line);
            let icon_w = if icon.is_some() { style.icon_size } else { 0.0 };
            width = width.max(join(icon_w, self.run_width(body, style), style.spacing));
            count += 1;
        }
        let height = count as f32 * style.size + count.saturating_sub(1) as f32 * style.line_spacing;
        Vec2::new(width, height)
    }

    /// Lays out `text` inside `bounds`.
    pub fn layout<'t>(&self, text: &'t str, bounds: Rect, style: &TextStyle) -> TextLayout<'f, 't> {
        self.layout_bytes(text.as_bytes(), bounds, style)
    }

    /// Byte-level entry point for hosts holding raw (possibly malformed)
    /// UTF-8 buffers. Malformed bytes draw the unknown glyph.
    pub fn layout_bytes<'t>(
        &self,
        bytes: &'t [u8],
        bounds: Rect,
        style: &TextStyle,
    ) -> TextLayout<'f, 't> {
        let lines = if bounds.is_empty() {
            // Degenerate bounds draw nothing rather than erroring.
            Vec::new()
        } else {
            self.plan_lines(bytes, bounds, style)
        };
        TextLayout::new(self.font, *style, bounds, lines)
    }

    // ── line planning ─────────────────────────────────────────────────────

    fn plan_lines<'t>(&self, bytes: &'t [u8], bounds: Rect, style: &TextStyle) -> Vec<Line<'t>> {
        let mut lines = Vec::new();
        for raw in bytes.split(|&b| b == b'\n') {
            let (icon, body) = parse_icon(raw);
            let icon_w = if icon.is_some() { style.icon_size } else { 0.0 };
            match style.wrap {
                WrapMode::None => {
                    let width = join(icon_w, self.run_width(body, style), style.spacing);
                    lines.push(Line { bytes: body, icon, width });
                }
                WrapMode::Char => self.wrap_chars(body, icon, icon_w, bounds.size.x, style, &mut lines),
                WrapMode::Word => self.wrap_words(body, icon, icon_w, bounds.size.x, style, &mut lines),
            }
        }
        lines
    }

    fn wrap_chars<'t>(
        &self,
        body: &'t [u8],
        icon: Option<u16>,
        icon_w: f32,
        max_w: f32,
        style: &TextStyle,
        out: &mut Vec<Line<'t>>,
    ) {
        let mut icon_cur = icon;
        let mut start = 0usize;
        let mut w = icon_w;
        let mut i = 0usize;

        while let Some((cp, n)) = decode_codepoint(&body[i..]) {
            let adv = self.glyph_advance(cp, style);
            let joined = join(w, adv, style.spacing);
            // Break the instant the next glyph would overflow — but never
            // leave a line empty, or a glyph wider than the bounds loops.
            if joined > max_w && (i > start || icon_cur.is_some()) {
                out.push(Line { bytes: &body[start..i], icon: icon_cur, width: w });
                icon_cur = None;
                start = i;
                w = adv;
            } else {
                w = joined;
            }
            i += n;
        }
        out.push(Line { bytes: &body[start..], icon: icon_cur, width: w });
    }

    fn wrap_words<'t>(
        &self,
        body: &'t [u8],
        icon: Option<u16>,
        icon_w: f32,
        max_w: f32,
        style: &TextStyle,
        out: &mut Vec<Line<'t>>,
    ) {
        let is_ws = |b: u8| b == b' ' || b == b'\t';

        let mut icon_cur = icon;
        let mut line_start = 0usize;
        let mut line_end = 0usize;
        let mut line_w = icon_w;
        // Extent/width up to the last committed word, excluding trailing
        // whitespace — what gets flushed when a wrap point lands.
        let mut word_end = 0usize;
        let mut word_w = icon_w;

        let mut pos = 0usize;
        while pos < body.len() {
            let ws = is_ws(body[pos]);
            let mut run_end = pos;
            while run_end < body.len() && is_ws(body[run_end]) == ws {
                run_end += 1;
            }
            let run = &body[pos..run_end];
            let run_w = self.run_width(run, style);

            if ws {
                // Whitespace joins tentatively; it is dropped again if the
                // next word wraps.
                line_w = join(line_w, run_w, style.spacing);
                line_end = run_end;
                pos = run_end;
                continue;
            }

            let joined = join(line_w, run_w, style.spacing);
            if joined <= max_w {
                line_w = joined;
                line_end = run_end;
                word_end = run_end;
                word_w = joined;
            } else if run_w <= max_w {
                // Wrap before the run; pending whitespace is dropped.
                if word_end > line_start || icon_cur.is_some() {
                    out.push(Line { bytes: &body[line_start..word_end], icon: icon_cur, width: word_w });
                    icon_cur = None;
                }
                line_start = pos;
                line_end = run_end;
                line_w = run_w;
                word_end = run_end;
                word_w = run_w;
            } else {
                // The run alone exceeds the full bounds width: degrade to
                // char-wrapping for this run, then resume word mode on its
                // trailing segment.
                let mut seg_start = line_start;
                let mut seg_w = line_w;
                let mut j = pos;
                while j < run_end {
                    let Some((cp, n)) = decode_codepoint(&body[j..run_end]) else { break };
                    let adv = self.glyph_advance(cp, style);
                    let joined = join(seg_w, adv, style.spacing);
                    if joined > max_w && (j > seg_start || icon_cur.is_some()) {
                        out.push(Line { bytes: &body[seg_start..j], icon: icon_cur, width: seg_w });
                        icon_cur = None;
                        seg_start = j;
                        seg_w = adv;
                    } else {
                        seg_w = joined;
                    }
                    j += n;
                }
                line_start = seg_start;
                line_end = run_end;
                line_w = seg_w;
                word_end = run_end;
                word_w = seg_w;
            }
            pos = run_end;
        }

        out.push(Line { bytes: &body[line_start..line_end], icon: icon_cur, width: line_w });
    }
}

/// Lazily yields positioned draws for one shaped text block.
///
/// Produced by [`TextShaper::layout`]; iterate it to completion within the
/// frame — it borrows the input text and is never stored.
pub struct TextLayout<'f, 't> {
    font: &'f dyn FontMetrics,
    style: TextStyle,
    bounds: Rect,
    lines: Vec<Line<'t>>,
    block_top: f32,
    dot_adv: f32,
    ellipsis_w: f32,

    line_idx: usize,
    rest: &'t [u8],
    in_line: bool,
    truncating: bool,
    pen_x: f32,
    line_y: f32,
    dots_left: u8,
}

impl<'f, 't> TextLayout<'f, 't> {
    fn new(font: &'f dyn FontMetrics, style: TextStyle, bounds: Rect, lines: Vec<Line<'t>>) -> Self {
        let count = lines.len();
        let block_h =
            count as f32 * style.size + count.saturating_sub(1) as f32 * style.line_spacing;
        let block_top = match style.v_align {
            VAlign::Top => bounds.origin.y,
            VAlign::Middle => bounds.origin.y + (bounds.size.y - block_h) * 0.5,
            VAlign::Bottom => bounds.bottom() - block_h,
        };

        let shaper = TextShaper { font };
        let dot_adv = shaper.glyph_advance('.', &style);
        let ellipsis_w = dot_adv * 3.0 + style.spacing * 2.0;

        Self {
            font,
            style,
            bounds,
            lines,
            block_top,
            dot_adv,
            ellipsis_w,
            line_idx: 0,
            rest: &[],
            in_line: false,
            truncating: false,
            pen_x: 0.0,
            line_y: 0.0,
            dots_left: 0,
        }
    }

    fn advance_of(&self, cp: char) -> f32 {
        TextShaper { font: self.font }.glyph_advance(cp, &self.style)
    }
}

impl Iterator for TextLayout<'_, '_> {
    type Item = TextDraw;

    fn next(&mut self) -> Option<TextDraw> {
        loop {
            // Ellipsis dots in flight.
            if self.dots_left > 0 {
                self.dots_left -= 1;
                let pos = Vec2::new(self.pen_x, self.line_y);
                self.pen_x += self.dot_adv + self.style.spacing;
                if self.dots_left == 0 {
                    self.rest = &[];
                }
                return Some(TextDraw::Glyph { codepoint: '.', pos });
            }

            if !self.in_line {
                let line = *self.lines.get(self.line_idx)?;
                let y = self.block_top
                    + self.line_idx as f32 * (self.style.size + self.style.line_spacing);

                // Wrapped layouts skip lines past the bottom edge entirely;
                // lines are monotonic downward, so nothing after them can
                // be visible either.
                if self.style.wrap != WrapMode::None && y + self.style.size > self.bounds.bottom() {
                    return None;
                }

                // Overflowing lines force left alignment so at least the
                // leading run stays visible.
                let start_x = if line.width > self.bounds.size.x {
                    self.bounds.origin.x
                } else {
                    match self.style.h_align {
                        HAlign::Left => self.bounds.origin.x,
                        HAlign::Center => {
                            self.bounds.origin.x + (self.bounds.size.x - line.width) * 0.5
                        }
                        HAlign::Right => self.bounds.right() - line.width,
                    }
                };

                self.line_y = y;
                self.pen_x = start_x;
                self.rest = line.bytes;
                self.in_line = true;
                self.truncating =
                    self.style.wrap == WrapMode::None && line.width > self.bounds.size.x;

                if let Some(id) = line.icon {
                    let pos = Vec2::new(self.pen_x, self.line_y);
                    self.pen_x += self.style.icon_size + self.style.spacing;
                    return Some(TextDraw::Icon { id, pos });
                }
            }

            let Some((cp, n)) = decode_codepoint(self.rest) else {
                self.in_line = false;
                self.line_idx += 1;
                continue;
            };
            let adv = self.advance_of(cp);

            if self.truncating {
                let last = decode_codepoint(&self.rest[n..]).is_none();
                let fits = if last {
                    self.pen_x + adv <= self.bounds.right()
                } else {
                    self.pen_x + adv + self.style.spacing + self.ellipsis_w <= self.bounds.right()
                };
                if !fits {
                    self.dots_left = 3;
                    continue;
                }
            }

            let pos = Vec2::new(self.pen_x, self.line_y);
            self.pen_x += adv + self.style.spacing;
            self.rest = &self.rest[n..];
            return Some(TextDraw::Glyph { codepoint: cp, pos });
        }
    }
}
