//! Lightbox state: an ordered item list plus a cursor with wraparound
//! navigation. Nothing here persists — each request rebuilds the state from
//! query parameters and the handlers turn the computed indices into links.

/// Wraparound successor of `index` in a list of `len` items.
pub fn next_index(index: usize, len: usize) -> usize {
    if len == 0 { index } else { (index + 1) % len }
}

/// Wraparound predecessor of `index` in a list of `len` items.
pub fn prev_index(index: usize, len: usize) -> usize {
    if len == 0 { index } else { (index + len - 1) % len }
}

#[derive(Debug, Clone)]
struct GalleryContext<T> {
    items: Vec<T>,
    index: usize,
}

/// A lightbox over some item type. Closed until `open` is called; the index
/// stays in `[0, len)` for as long as a gallery is open.
#[derive(Debug, Clone)]
pub struct Lightbox<T> {
    context: Option<GalleryContext<T>>,
}

impl<T> Default for Lightbox<T> {
    fn default() -> Self {
        Lightbox { context: None }
    }
}

impl<T> Lightbox<T> {
    pub fn closed() -> Lightbox<T> {
        Lightbox::default()
    }

    /// Replace the gallery context. Opening on an empty list leaves the
    /// lightbox closed; an out-of-range index is clamped to the last item.
    pub fn open(&mut self, items: Vec<T>, index: usize) {
        if items.is_empty() {
            self.context = None;
            return;
        }
        let index = index.min(items.len() - 1);
        self.context = Some(GalleryContext { items, index });
    }

    pub fn close(&mut self) {
        self.context = None;
    }

    pub fn is_open(&self) -> bool {
        self.context.is_some()
    }

    pub fn index(&self) -> Option<usize> {
        self.context.as_ref().map(|ctx| ctx.index)
    }

    pub fn len(&self) -> usize {
        self.context.as_ref().map_or(0, |ctx| ctx.items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn current(&self) -> Option<&T> {
        self.context.as_ref().map(|ctx| &ctx.items[ctx.index])
    }

    pub fn next(&mut self) {
        if let Some(ctx) = &mut self.context {
            ctx.index = next_index(ctx.index, ctx.items.len());
        }
    }

    pub fn prev(&mut self) {
        if let Some(ctx) = &mut self.context {
            ctx.index = prev_index(ctx.index, ctx.items.len());
        }
    }
}
