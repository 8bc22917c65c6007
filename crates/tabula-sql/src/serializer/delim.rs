use std::fmt;

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

impl<L> fmt::Display for Comma<L>
where
    L: Iterator + Clone,
    L::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for item in self.0.clone() {
            write!(f, "{s}{item}")?;
            s = ", ";
        }
        Ok(())
    }
}

/// `column=?`
pub(super) struct Assign<'a>(pub(super) &'a str);

impl fmt::Display for Assign<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=?", self.0)
    }
}
