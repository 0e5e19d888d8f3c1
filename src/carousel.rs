use std::time::Duration;

/// How often the certificate carousel moves on by itself.
pub const AUTO_ADVANCE: Duration = Duration::from_secs(3);

/// Most slides on screen at once (three columns on large screens).
pub const MAX_PER_VIEW: usize = 3;

/// Looping position over a fixed number of slides.
///
/// The track repeats the first `MAX_PER_VIEW - 1` slides after the last one,
/// so a view that starts near the end of the list is filled from its start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides laid out on the track, repeats included.
    pub fn track_len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.len + MAX_PER_VIEW - 1
        }
    }

    /// Which slide sits at `position` on the track.
    pub fn slide_at(&self, position: usize) -> usize {
        if self.is_empty() {
            0
        } else {
            position % self.len
        }
    }

    /// Track positions on screen when `per_view` slides fit, `None` for an
    /// empty slot past the end of the track.
    pub fn visible(&self, per_view: usize) -> Vec<Option<usize>> {
        (self.index..self.index + per_view)
            .map(|pos| (pos < self.track_len()).then(|| self.slide_at(pos)))
            .collect()
    }

    pub fn next(self) -> Self {
        self.go_to(self.index + 1)
    }

    pub fn prev(self) -> Self {
        if self.is_empty() {
            return self;
        }
        self.go_to(self.index + self.len - 1)
    }

    pub fn go_to(self, index: usize) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            index: index % self.len,
            ..self
        }
    }
}
