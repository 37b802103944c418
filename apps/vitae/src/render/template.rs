//! Page templates with `{{region-key}}` placeholders.

use std::str::FromStr;

use crate::engine::regions::{Region, Regions};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(Region),
}

/// A parsed template. A region key may appear any number of times; every
/// occurrence receives the same content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parses `source`. Anything between `{{` and `}}` that is not a known
    /// region key is kept verbatim.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(start) = rest.find(OPEN) {
            let after_open = &rest[start + OPEN.len()..];
            let Some(end) = after_open.find(CLOSE) else {
                break;
            };

            match Region::from_str(after_open[..end].trim()) {
                Ok(region) => {
                    literal.push_str(&rest[..start]);
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(region));
                    rest = &after_open[end + CLOSE.len()..];
                }
                Err(_) => {
                    literal.push_str(&rest[..start + OPEN.len()]);
                    rest = after_open;
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Regions this template has a slot for, in document order.
    #[cfg(test)]
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(r) => Some(r),
            Segment::Literal(_) => None,
        })
    }

    /// Writes every region's content into its placeholders. Regions that were
    /// never written fill as empty.
    pub fn fill(&self, regions: &Regions) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(region) => out.push_str(regions.get(region).unwrap_or("")),
            }
        }
        out
    }
}
