//! Machine-friendly output: greppable lines and filtered target lists.

use super::ListFilter;
use crate::types::{Classification, Target};
use std::io::{self, Write};

/// Print `identifier : state` for each classified target.
pub fn print_greppable<W: Write>(out: &mut W, targets: &[Target]) -> io::Result<()> {
    for target in targets {
        if let Some(state) = target.classification() {
            writeln!(out, "{} : {}", target.identifier, state)?;
        }
    }
    Ok(())
}

/// Print only the targets selected by `filter`.
pub fn print_list<W: Write>(out: &mut W, targets: &[Target], filter: ListFilter) -> io::Result<()> {
    for target in targets {
        let Some(state) = target.classification() else {
            continue;
        };
        if filter.accepts(state) {
            writeln!(out, "{}", target)?;
        }
    }
    Ok(())
}

impl ListFilter {
    pub fn accepts(self, state: Classification) -> bool {
        match self {
            Self::InScope => state == Classification::InScope,
            Self::Excluded => state == Classification::Excluded,
            Self::OutOfScope => state == Classification::OutOfScope,
            Self::NotInScope => state.is_not_in_scope(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;
    use std::net::Ipv4Addr;

    fn sample() -> Vec<Target> {
        let mut inside = Target::hostname("app.test", Some(Ipv4Addr::new(10, 0, 0, 6)));
        inside.classify_with(|_| Verdict::new(Classification::InScope, "10.0.0.0/24"));
        let mut excluded = Target::parse_literal("10.0.0.5").unwrap();
        excluded.classify_with(|_| Verdict::new(Classification::Excluded, "10.0.0.5"));
        let mut outside = Target::parse_literal("10.0.1.1").unwrap();
        outside.classify_with(|_| Verdict::out_of_scope());
        vec![inside, excluded, outside, Target::hostname("gone.test", None)]
    }

    fn listed(filter: ListFilter) -> String {
        let mut buf = Vec::new();
        print_list(&mut buf, &sample(), filter).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_greppable() {
        let mut buf = Vec::new();
        print_greppable(&mut buf, &sample()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "app.test : InScope\n10.0.0.5 : Excluded\n10.0.1.1 : OutOfScope\n"
        );
    }

    #[test]
    fn test_list_filters() {
        assert_eq!(listed(ListFilter::InScope), "10.0.0.6 (app.test)\n");
        assert_eq!(listed(ListFilter::Excluded), "10.0.0.5\n");
        assert_eq!(listed(ListFilter::OutOfScope), "10.0.1.1\n");
        assert_eq!(listed(ListFilter::NotInScope), "10.0.0.5\n10.0.1.1\n");
    }
}
