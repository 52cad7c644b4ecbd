//! # Sheet Replication
//!
//! Produces a batch of sheets from one rendered template. Each sheet is a deep
//! clone of the template with every grid re-sampled independently; the free
//! cell, when configured, keeps whatever the template put there.
//!
//! A cell without a content holder is not an error. It is left as cloned,
//! recorded as a [`CellMismatch`] on the sheet, and the batch carries on.

use crate::error::{BingoError, Result};
use crate::grid::bonus_index;
use crate::markup::Element;
use crate::sampler::sample;
use log::{debug, warn};
use rand::Rng;

const GRID_TAG: &str = "table";
const CELL_TAG: &str = "td";

/// A replicated cell whose content could not be overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMismatch {
    /// Index of the grid within its sheet.
    pub grid: usize,
    /// Row-major index of the cell within its grid.
    pub cell: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub root: Element,
    pub mismatches: Vec<CellMismatch>,
}

impl Sheet {
    pub fn grids(&self) -> Vec<&Element> {
        self.root.find_all(GRID_TAG)
    }
}

pub fn replicate<R: Rng + ?Sized>(
    template: &Element,
    sheet_count: usize,
    terms: &[String],
    has_free_cell: bool,
    rng: &mut R,
) -> Result<Vec<Sheet>> {
    if template.find_all(GRID_TAG).is_empty() {
        return Err(BingoError::NoGridFound);
    }

    let mut sheets = Vec::with_capacity(sheet_count);
    for index in 0..sheet_count {
        let sheet = replicate_one(template, terms, has_free_cell, rng)?;
        debug!(
            "sheet {}: {} grid(s), {} skipped cell(s)",
            index,
            sheet.grids().len(),
            sheet.mismatches.len()
        );
        sheets.push(sheet);
    }
    Ok(sheets)
}

fn replicate_one<R: Rng + ?Sized>(
    template: &Element,
    terms: &[String],
    has_free_cell: bool,
    rng: &mut R,
) -> Result<Sheet> {
    let mut root = template.clone();
    let mut mismatches = Vec::new();

    for (grid_index, grid) in root.find_all_mut(GRID_TAG).into_iter().enumerate() {
        let cells = grid.find_all_mut(CELL_TAG);
        let values = sample(terms, cells.len(), rng)?;
        let bonus = bonus_index(cells.len());

        for (cell_index, (cell, value)) in cells.into_iter().zip(values).enumerate() {
            if has_free_cell && cell_index == bonus {
                continue;
            }
            match cell.first_element_child_mut() {
                Some(holder) => holder.set_text(value),
                None => {
                    warn!(
                        "grid {} cell {} has no content holder; leaving it as cloned",
                        grid_index, cell_index
                    );
                    mismatches.push(CellMismatch {
                        grid: grid_index,
                        cell: cell_index,
                    });
                }
            }
        }
    }

    Ok(Sheet { root, mismatches })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSpec;
    use crate::model::{BoardsPerPage, Layout};
    use crate::render::{render_template, DEFAULT_FREE_MARKER};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn terms(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("term {}", i)).collect()
    }

    fn template(side: usize, free: bool, boards: BoardsPerPage, pool: &[String]) -> Element {
        let layout = Layout {
            boards_per_page: boards,
            ..Layout::default()
        };
        let mut rng = StdRng::seed_from_u64(100);
        render_template(
            pool,
            GridSpec::new(side, free),
            &layout,
            DEFAULT_FREE_MARKER,
            &mut rng,
        )
        .unwrap()
    }

    fn cell_html(root: &Element, grid: usize, cell: usize) -> String {
        root.find_all("table")[grid].find_all("td")[cell].to_html()
    }

    #[test]
    fn returns_requested_number_of_sheets() {
        let pool = terms(40);
        let tpl = template(5, true, BoardsPerPage::One, &pool);
        let mut rng = StdRng::seed_from_u64(1);
        let sheets = replicate(&tpl, 5, &pool, true, &mut rng).unwrap();
        assert_eq!(sheets.len(), 5);
        assert!(sheets.iter().all(|s| s.mismatches.is_empty()));
    }

    fn term_cells(root: &Element, grid: usize, free: Option<usize>) -> Vec<String> {
        root.find_all("table")[grid]
            .find_all("td")
            .into_iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != free)
            .map(|(_, td)| td.text_content())
            .collect()
    }

    #[test]
    fn pool_one_short_of_cells_repeats_terms() {
        // 24 terms build the template without repeats, but replication
        // draws 25 per table and so samples with replacement.
        let pool = terms(24);
        let tpl = template(5, true, BoardsPerPage::One, &pool);
        let mut rng = StdRng::seed_from_u64(1);

        let sheets = replicate(&tpl, 5, &pool, true, &mut rng).unwrap();
        for sheet in &sheets {
            let cells = term_cells(&sheet.root, 0, Some(12));
            assert_eq!(cells.len(), 24);
            let unique: HashSet<_> = cells.iter().collect();
            assert!(unique.len() < cells.len());
        }
    }

    #[test]
    fn pool_matching_cells_stays_distinct() {
        let pool = terms(25);
        let tpl = template(5, true, BoardsPerPage::One, &pool);
        let mut rng = StdRng::seed_from_u64(1);

        let sheets = replicate(&tpl, 5, &pool, true, &mut rng).unwrap();
        for sheet in &sheets {
            let cells = term_cells(&sheet.root, 0, Some(12));
            let unique: HashSet<_> = cells.iter().collect();
            assert_eq!(unique.len(), 24);
        }
    }

    #[test]
    fn free_cell_identical_to_template() {
        let pool = terms(40);
        let tpl = template(5, true, BoardsPerPage::One, &pool);
        let original_free = cell_html(&tpl, 0, 12);
        let mut rng = StdRng::seed_from_u64(2);

        let sheets = replicate(&tpl, 5, &pool, true, &mut rng).unwrap();
        for sheet in &sheets {
            assert_eq!(cell_html(&sheet.root, 0, 12), original_free);
        }
    }

    #[test]
    fn non_free_cells_come_from_the_pool() {
        let pool = terms(40);
        let tpl = template(5, true, BoardsPerPage::One, &pool);
        let mut rng = StdRng::seed_from_u64(3);

        let sheets = replicate(&tpl, 3, &pool, true, &mut rng).unwrap();
        for sheet in &sheets {
            let cells = sheet.grids()[0].find_all("td");
            let texts: Vec<String> = cells
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != 12)
                .map(|(_, td)| td.text_content())
                .collect();
            assert_eq!(texts.len(), 24);
            assert!(texts.iter().all(|t| pool.contains(t)));
            let unique: HashSet<_> = texts.iter().collect();
            assert_eq!(unique.len(), 24);
        }
    }

    #[test]
    fn without_free_cell_every_cell_is_resampled() {
        let pool = vec!["only".to_string()];
        let tpl = template(3, true, BoardsPerPage::One, &terms(9));
        let mut rng = StdRng::seed_from_u64(4);

        let sheets = replicate(&tpl, 1, &pool, false, &mut rng).unwrap();
        let cells = sheets[0].grids()[0].find_all("td");
        assert!(cells.iter().all(|td| td.text_content() == "only"));
    }

    #[test]
    fn each_grid_is_sampled_independently() {
        let pool = terms(60);
        let tpl = template(5, true, BoardsPerPage::Four, &pool);
        let mut rng = StdRng::seed_from_u64(5);

        let sheets = replicate(&tpl, 1, &pool, true, &mut rng).unwrap();
        let grids = sheets[0].grids();
        assert_eq!(grids.len(), 4);
        let first: Vec<String> = grids[0].find_all("td").iter().map(|t| t.text_content()).collect();
        let second: Vec<String> = grids[1].find_all("td").iter().map(|t| t.text_content()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn no_grid_fails_for_any_count() {
        let tpl = Element::new("div").with_child(Element::new("p").with_text("not rendered"));
        let mut rng = StdRng::seed_from_u64(6);
        for n in [0, 1, 3] {
            let err = replicate(&tpl, n, &terms(5), false, &mut rng).unwrap_err();
            assert!(matches!(err, BingoError::NoGridFound));
        }
    }

    #[test]
    fn zero_sheets_is_empty_batch() {
        let pool = terms(10);
        let tpl = template(3, false, BoardsPerPage::One, &pool);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(replicate(&tpl, 0, &pool, false, &mut rng).unwrap().is_empty());
    }

    #[test]
    fn empty_pool_propagates() {
        let tpl = template(3, false, BoardsPerPage::One, &terms(9));
        let mut rng = StdRng::seed_from_u64(8);
        let err = replicate(&tpl, 2, &[], false, &mut rng).unwrap_err();
        assert!(matches!(err, BingoError::EmptyPool));
    }

    #[test]
    fn missing_content_holder_is_skipped_and_recorded() {
        let tpl = Element::new("div").with_child(
            Element::new("table").with_child(
                Element::new("tr")
                    .with_child(Element::new("td").with_child(Element::new("span").with_text("a")))
                    .with_child(Element::new("td").with_text("bare"))
                    .with_child(Element::new("td").with_child(Element::new("span").with_text("c"))),
            ),
        );
        let mut rng = StdRng::seed_from_u64(9);
        let sheets = replicate(&tpl, 1, &["z".to_string()], false, &mut rng).unwrap();

        let sheet = &sheets[0];
        assert_eq!(sheet.mismatches, vec![CellMismatch { grid: 0, cell: 1 }]);
        let texts: Vec<String> = sheet.root.find_all("td").iter().map(|t| t.text_content()).collect();
        assert_eq!(texts, vec!["z", "bare", "z"]);
    }

    #[test]
    fn mutating_template_after_replicate_leaves_sheets_alone() {
        let pool = terms(20);
        let mut tpl = template(3, false, BoardsPerPage::One, &pool);
        let mut rng = StdRng::seed_from_u64(10);
        let sheets = replicate(&tpl, 2, &pool, false, &mut rng).unwrap();
        let before: Vec<String> = sheets.iter().map(|s| s.root.to_html()).collect();

        for span in tpl.find_all_mut("span") {
            span.set_text("mutated");
        }

        let after: Vec<String> = sheets.iter().map(|s| s.root.to_html()).collect();
        assert_eq!(before, after);
        assert!(!after[0].contains("mutated"));
    }

    #[test]
    fn sheets_do_not_alias_each_other() {
        let pool = terms(20);
        let tpl = template(3, false, BoardsPerPage::One, &pool);
        let mut rng = StdRng::seed_from_u64(11);
        let mut sheets = replicate(&tpl, 2, &pool, false, &mut rng).unwrap();
        let second = sheets[1].root.to_html();

        for span in sheets[0].root.find_all_mut("span") {
            span.set_text("changed");
        }
        assert_eq!(sheets[1].root.to_html(), second);
    }
}
