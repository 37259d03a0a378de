use std::ops::Range;

use crate::{data::AngleMode, interpreter::run, parser::Postfix};

/// The horizontal extent of a plot. Column `width / 2` is `x = 0` and
/// `scale` columns make up one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub scale: f64,
}

impl Viewport {
    pub fn new(width: u32, scale: f64) -> Self {
        Self { width, scale }
    }

    pub fn x_at(&self, column: u32) -> f64 {
        (column as f64 - self.width as f64 / 2.0) / self.scale
    }
}

/// Lazily evaluates one expression at every column of a [`Viewport`],
/// yielding `(column, y)` in column order. Columns where the expression
/// has no finite value are skipped.
pub struct Samples<'a> {
    postfix: &'a Postfix,
    viewport: Viewport,
    mode: AngleMode,
    columns: Range<u32>,
}

impl<'a> Samples<'a> {
    pub fn new(postfix: &'a Postfix, viewport: Viewport, mode: AngleMode) -> Self {
        Self {
            postfix,
            viewport,
            mode,
            columns: 0..viewport.width,
        }
    }
}

impl Iterator for Samples<'_> {
    type Item = (u32, f64);

    fn next(&mut self) -> Option<Self::Item> {
        for column in self.columns.by_ref() {
            let x = self.viewport.x_at(column);
            match run(self.postfix, self.mode, Some(x)) {
                Ok(y) => return Some((column, y)),
                Err(error) => log::trace!("gap at column {column} (x = {x}): {error}"),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.columns.len()))
    }
}

impl Postfix {
    pub fn sample(&self, viewport: Viewport, mode: AngleMode) -> Samples<'_> {
        Samples::new(self, viewport, mode)
    }
}
