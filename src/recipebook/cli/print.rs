use colored::Colorize;
use recipebook::api::{CmdMessage, MessageLevel};
use recipebook::index::{DisplayIndex, DisplayRecipe};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const INDEX_WIDTH: usize = 6;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_full_recipes(recipes: &[DisplayRecipe]) {
    for (i, dr) in recipes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            dr.index.to_string().yellow(),
            dr.recipe.title.bold()
        );
        println!("--------------------------------");
        print_section("Ingredients", &dr.recipe.ingredients);
        print_section("Preparation", &dr.recipe.preparation_steps);
    }
}

fn print_section(heading: &str, body: &str) {
    println!("{}", heading.underline());
    if body.trim().is_empty() {
        println!("{}", "(none)".dimmed());
    } else {
        println!("{}", body);
    }
}

pub(super) fn print_recipes(recipes: &[DisplayRecipe], empty_message: &str) {
    if recipes.is_empty() {
        println!("{}", empty_message.dimmed());
        return;
    }

    for dr in recipes {
        let idx_str = format!("{:>width$}. ", dr.index, width = INDEX_WIDTH - 2);

        let preview: String = dr
            .recipe
            .ingredients
            .chars()
            .take(60)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        let available = LINE_WIDTH.saturating_sub(idx_str.width());
        let title = truncate_to_width(&dr.recipe.title, available);
        let rest = available.saturating_sub(title.width() + 1);
        let preview = truncate_to_width(&preview, rest);

        let idx_colored = match dr.index {
            DisplayIndex::Trashed(_) => idx_str.red(),
            DisplayIndex::Active(_) => idx_str.normal(),
        };

        if preview.is_empty() {
            println!("{}{}", idx_colored, title.bold());
        } else {
            println!("{}{} {}", idx_colored, title.bold(), preview.dimmed());
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    if max_width > 0 {
        result.push('…');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Soup", 10), "Soup");
    }

    #[test]
    fn long_text_gets_ellipsis_within_width() {
        let out = truncate_to_width("Feijoada completa", 8);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 8);
    }

    #[test]
    fn wide_chars_count_double() {
        let out = truncate_to_width("寿司寿司寿司", 5);
        assert!(out.width() <= 5);
    }

    #[test]
    fn zero_width_yields_nothing() {
        assert_eq!(truncate_to_width("Soup", 0), "");
    }
}
