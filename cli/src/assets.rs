//! Embedded demo content.

use vitrine_engine::{ContentError, Portfolio, parse_portfolio};

const DEMO_PORTFOLIO_RAW: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/portfolio.toml"));

/// The built-in portfolio shown when no content file is configured.
pub fn demo_portfolio() -> Result<Portfolio, ContentError> {
    parse_portfolio(DEMO_PORTFOLIO_RAW)
}

#[cfg(test)]
mod tests {
    use super::demo_portfolio;

    #[test]
    fn embedded_portfolio_parses() {
        let portfolio = demo_portfolio().expect("embedded portfolio must parse");
        assert!(!portfolio.menu.is_empty());
        assert!(
            portfolio
                .menu
                .iter()
                .all(|item| portfolio.section_index(&item.target).is_some()),
            "every menu tile must target a real section"
        );
        assert!(
            portfolio.sections.iter().any(|section| section.landing),
            "demo needs a landing section for the stat counters"
        );
    }
}
