//! Firewall rule generation for excluded targets.
//!
//! Rules are only printed, never applied.

use crate::types::{Classification, Target};
use std::io::{self, Write};
use std::net::Ipv4Addr;

/// The inbound and outbound drop rules for one address.
pub fn firewall_rules(addr: Ipv4Addr) -> [String; 2] {
    [
        format!("iptables -A INPUT -s {} -j DROP", addr),
        format!("iptables -A OUTPUT -d {} -j DROP", addr),
    ]
}

/// Print rules for every excluded target, in input order.
pub fn print_firewall<W: Write>(out: &mut W, targets: &[Target]) -> io::Result<()> {
    let excluded = targets
        .iter()
        .filter(|t| t.classification() == Some(Classification::Excluded))
        .filter_map(|t| t.address);

    for addr in excluded {
        for rule in firewall_rules(addr) {
            writeln!(out, "{}", rule)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;

    #[test]
    fn test_rules_for_excluded_target_only() {
        let mut excluded = Target::parse_literal("10.0.0.5").unwrap();
        excluded.classify_with(|_| Verdict::new(Classification::Excluded, "10.0.0.5"));
        let mut in_scope = Target::parse_literal("10.0.0.6").unwrap();
        in_scope.classify_with(|_| Verdict::new(Classification::InScope, "10.0.0.0/24"));

        let mut buf = Vec::new();
        print_firewall(&mut buf, &[in_scope, excluded]).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "iptables -A INPUT -s 10.0.0.5 -j DROP\n\
             iptables -A OUTPUT -d 10.0.0.5 -j DROP\n"
        );
    }

    #[test]
    fn test_no_excluded_targets_prints_nothing() {
        let mut buf = Vec::new();
        print_firewall(&mut buf, &[Target::hostname("x.test", None)]).unwrap();
        assert!(buf.is_empty());
    }
}
