use crate::commands::{repeat_warning, CmdResult};
use crate::error::Result;
use crate::grid::{build_grid, GridSpec};
use rand::Rng;

pub fn run<R: Rng + ?Sized>(terms: &[String], spec: GridSpec, rng: &mut R) -> Result<CmdResult> {
    let grid = build_grid(terms, spec, rng)?;
    let mut result = CmdResult::default();
    if let Some(warning) = repeat_warning(terms.len(), spec.needed_terms()) {
        result.add_message(warning);
    }
    Ok(result.with_grid(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BingoError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn builds_one_grid() {
        let terms: Vec<String> = (0..30).map(|i| i.to_string()).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let result = run(&terms, GridSpec::new(5, true), &mut rng).unwrap();
        let grid = result.grid.unwrap();
        assert_eq!(grid.cells().len(), 25);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn warns_on_small_pool() {
        let terms = vec!["a".to_string(), "b".to_string()];
        let mut rng = StdRng::seed_from_u64(1);
        let result = run(&terms, GridSpec::new(3, false), &mut rng).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("will repeat"));
    }

    #[test]
    fn empty_pool_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = run(&[], GridSpec::new(3, false), &mut rng).unwrap_err();
        assert!(matches!(err, BingoError::EmptyPool));
    }
}
