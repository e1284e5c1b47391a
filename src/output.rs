//! Rendering of lookup results for the terminal.
//!
//! Found entries print as aligned columns (category, term, meaning, word
//! type), one section per translation group, followed by a total-count
//! footer. Zero-result lookups print a notice plus any suggestions.

use crate::extract::{PageResult, Translation, WordType};
use crate::ui::Style;

/// Prints a lookup result to stdout.
pub fn print_result(result: &PageResult) {
    if result.is_empty() {
        print_not_found(result);
        return;
    }

    let (category_width, term_width) = column_widths(result);

    for group in &result.groups {
        if group.translations.is_empty() {
            continue;
        }

        if !group.title.is_empty() {
            println!("{}", Style::header(&group.title));
        }

        for translation in &group.translations {
            println!("{}", format_row(translation, category_width, term_width));
        }

        println!();
    }

    println!(
        "{}",
        Style::footer(format!("===== [ Total: {} ] =====", result.total_row_count))
    );
}

fn print_not_found(result: &PageResult) {
    println!(
        "{}",
        Style::warning(format!(
            "There is no translation found for '{}'",
            result.query
        ))
    );

    if result.suggestions.is_empty() {
        return;
    }

    println!();
    println!("{}", Style::header("==== Suggestions ===="));
    for suggestion in &result.suggestions {
        println!("{suggestion}");
    }
}

/// Widest category and term values across every printed row. Padding is
/// applied to the raw text before styling so ANSI codes never skew the
/// alignment.
fn column_widths(result: &PageResult) -> (usize, usize) {
    let mut category_width = 0;
    let mut term_width = 0;

    for translation in result.groups.iter().flat_map(|group| &group.translations) {
        category_width = category_width.max(translation.category.chars().count());
        term_width = term_width.max(translation.text.chars().count());
    }

    (category_width, term_width)
}

fn format_row(translation: &Translation, category_width: usize, term_width: usize) -> String {
    let category = pad(&translation.category, category_width);
    let term = pad(&translation.text, term_width);

    let mut row = format!(
        "{}  {}  {}",
        Style::category(category),
        Style::term(term),
        translation.meaning
    );

    if translation.word_type != WordType::Unknown {
        row.push_str(&format!(
            " {}",
            Style::word_type(format!("({})", translation.word_type.suffix()))
        ));
    }

    row
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(padding))
}
