use crate::post::RawPost;

/// Category buttons shown above the feed, in display order.
pub const CATEGORIES: &[&str] = &["정치", "영토갈등", "사회정의", "지방행정", "노동운동"];

const FEATURED_COUNT: usize = 2;

/// Featured cards (the first two posts) and the rest.
#[derive(Debug)]
pub struct FeedLayout<'a> {
    pub featured: &'a [RawPost],
    pub recent: &'a [RawPost],
}

impl<'a> FeedLayout<'a> {
    pub fn new(posts: &'a [RawPost]) -> Self {
        let (featured, recent) = posts.split_at(posts.len().min(FEATURED_COUNT));
        FeedLayout { featured, recent }
    }

    pub fn is_empty(&self) -> bool {
        self.featured.is_empty()
    }
}

/// Keep posts in `category`; `None` keeps everything.
pub fn filter_by_category(posts: Vec<RawPost>, category: Option<&str>) -> Vec<RawPost> {
    match category.map(str::trim) {
        None => posts,
        Some(wanted) => posts
            .into_iter()
            .filter(|p| p.category.trim() == wanted)
            .collect(),
    }
}

/// Post count per known category, in button order, plus the count of posts
/// whose category is not one of them.
pub fn category_counts(posts: &[RawPost]) -> (Vec<(&'static str, usize)>, usize) {
    let counts: Vec<(&'static str, usize)> = CATEGORIES
        .iter()
        .map(|&cat| (cat, posts.iter().filter(|p| p.category.trim() == cat).count()))
        .collect();
    let known: usize = counts.iter().map(|(_, n)| n).sum();
    (counts, posts.len() - known)
}

/// Which post's popup is open, if any.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PopupState {
    open: Option<usize>,
}

impl PopupState {
    pub fn open(&mut self, idx: usize) {
        self.open = Some(idx);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, idx: usize) -> bool {
        self.open == Some(idx)
    }

    /// Cards hide their own source link while their popup covers them.
    pub fn shows_card_source(&self, idx: usize, post: &RawPost) -> bool {
        post.source_url.is_some() && !self.is_open(idx)
    }
}
