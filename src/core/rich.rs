// src/core/rich.rs
//
// Neutral rich-content value: plain text interleaved with inline links and
// images. Extraction produces it from DOM fragments; renderers turn it into
// HTML, delimited text, or GUI labels without knowing about the DOM.

#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    Text(String),
    Link { label: String, href: String },
    Image { src: String, alt: String, width: Option<u32> },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RichText {
    segments: Vec<Segment>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        let mut rt = Self::new();
        rt.push_text(&text.into());
        rt
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self { segments: vec![Segment::Link { label: label.into(), href: href.into() }] }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>, width: Option<u32>) -> Self {
        Self { segments: vec![Segment::Image { src: src.into(), alt: alt.into(), width }] }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append text, merging with a trailing text segment. Empty text is dropped.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Text(s!(text)));
        }
    }

    pub fn push(&mut self, seg: Segment) {
        match seg {
            Segment::Text(t) => self.push_text(&t),
            other => self.segments.push(other),
        }
    }

    /// Collapse whitespace inside text and labels; trim the outer edges.
    pub fn normalized(self) -> Self {
        let mut out = RichText::new();
        let mut prev_space = true; // swallow leading whitespace
        for seg in self.segments {
            match seg {
                Segment::Text(t) => {
                    let mut buf = String::with_capacity(t.len());
                    for ch in t.chars() {
                        if ch.is_whitespace() {
                            if !prev_space { buf.push(' '); prev_space = true; }
                        } else { buf.push(ch); prev_space = false; }
                    }
                    out.push_text(&buf);
                }
                Segment::Link { label, href } => {
                    let label = super::sanitize::normalize_ws(&label);
                    prev_space = false;
                    out.segments.push(Segment::Link { label, href });
                }
                img @ Segment::Image { .. } => {
                    prev_space = false;
                    out.segments.push(img);
                }
            }
        }
        // trailing whitespace
        if let Some(Segment::Text(last)) = out.segments.last_mut() {
            let trimmed = last.trim_end().len();
            last.truncate(trimmed);
            if last.is_empty() {
                out.segments.pop();
            }
        }
        out
    }

    /// Text as a reader sees it: link labels inline, images dropped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            match seg {
                Segment::Text(t) => out.push_str(t),
                Segment::Link { label, .. } => out.push_str(label),
                Segment::Image { .. } => {}
            }
        }
        out
    }

    /// The link target when the whole value is exactly one link.
    pub fn single_link(&self) -> Option<(&str, &str)> {
        match self.segments.as_slice() {
            [Segment::Link { label, href }] => Some((label.as_str(), href.as_str())),
            _ => None,
        }
    }

    /// The image source when the whole value is exactly one image.
    pub fn single_image(&self) -> Option<&str> {
        match self.segments.as_slice() {
            [Segment::Image { src, .. }] => Some(src.as_str()),
            _ => None,
        }
    }

}
