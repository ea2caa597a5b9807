//! Host integration for stamping placements into a scene
//!
//! The generator stays agnostic about what a template handle means. A
//! host implements [`Instantiator`] to turn each placement into whatever
//! an instance is on its side, and [`realize`] drives the calls in
//! placement order.

use crate::placement::Placement;

/// Capability a host offers for stamping one placement.
///
/// `Instance` is the host's own handle for the created object.
pub trait Instantiator<T> {
    type Instance;

    /// Create one instance for `placement`
    fn instantiate(&mut self, placement: &Placement<T>) -> Self::Instance;
}

/// Stamp every placement through the host, in order
pub fn realize<T, H: Instantiator<T>>(
    placements: &[Placement<T>],
    host: &mut H,
) -> Vec<H::Instance> {
    placements
        .iter()
        .map(|placement| host.instantiate(placement))
        .collect()
}

/// A host that records placements as text lines.
///
/// Each instance becomes one `name position` line, e.g. `Wall0 (0, 0, 0)`.
/// The instance handle is the index of the line.
#[derive(Debug, Default)]
pub struct ListingHost {
    lines: Vec<String>,
}

impl ListingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines recorded so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The full listing, one newline-terminated line per instance
    pub fn finish(self) -> String {
        let mut out = String::new();
        for line in self.lines {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

impl<T> Instantiator<T> for ListingHost {
    type Instance = usize;

    fn instantiate(&mut self, placement: &Placement<T>) -> usize {
        self.lines
            .push(format!("{} {}", placement.instance_name, placement.position));
        self.lines.len() - 1
    }
}
