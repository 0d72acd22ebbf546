/// A line together with the line that came right before it.
///
/// `previous` is `None` only for the first line of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePair<T> {
    pub previous: Option<T>,
    pub current: T,
}

/// Iterator adaptor yielding one [`LinePair`] per input line.
///
/// Keeps a single element of lookback, so it works on unbounded inputs.
#[derive(Debug, Clone)]
pub struct LinePairs<I: Iterator> {
    lines: I,
    previous: Option<I::Item>,
}

/// Pairs every line with its predecessor.
///
/// Yields exactly as many pairs as there are lines; there is no trailing
/// pair once the input is exhausted.
pub fn line_pairs<I>(lines: I) -> LinePairs<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    LinePairs {
        lines: lines.into_iter(),
        previous: None,
    }
}

impl<I> Iterator for LinePairs<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = LinePair<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.lines.next()?;
        let previous = self.previous.replace(current.clone());
        Some(LinePair { previous, current })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

impl<I> ExactSizeIterator for LinePairs<I>
where
    I: ExactSizeIterator,
    I::Item: Clone,
{
}

impl<I> std::iter::FusedIterator for LinePairs<I>
where
    I: std::iter::FusedIterator,
    I::Item: Clone,
{
}
