use crate::core::Features;
use crate::streams::Stream;
use std::io::Error;

/// Finite stream replaying a fixed list of examples.
pub struct VecStream<Y> {
    pub rows: Vec<(Features, Y)>,
    idx: usize,
}

impl<Y> VecStream<Y> {
    pub fn new(rows: Vec<(Features, Y)>) -> Self {
        Self { rows, idx: 0 }
    }
}

impl<Y: Clone> Stream for VecStream<Y> {
    type Target = Y;

    fn has_more_instances(&self) -> bool {
        self.idx < self.rows.len()
    }

    fn next_instance(&mut self) -> Option<(Features, Y)> {
        let row = self.rows.get(self.idx)?.clone();
        self.idx += 1;
        Some(row)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
