/// Hands out slide ids for one document.
///
/// A single counter is threaded through every section so ids never reset
/// or collide.
#[derive(Debug, Default)]
pub struct SlideIds {
    next: usize,
}

impl SlideIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id, starting at 0.
    pub fn next_id(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }

    /// How many ids have been issued so far.
    pub fn issued(&self) -> usize {
        self.next
    }
}
