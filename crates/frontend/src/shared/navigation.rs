/// Client-side navigation to a route path.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Adapts the router's `use_navigate` handle (or any plain closure).
impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate(&self, path: &str) {
        self(path)
    }
}
