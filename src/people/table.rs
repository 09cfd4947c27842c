//! Fixed-width table rendering for person records

use std::io::{self, Write};

use super::Person;

/// Message printed instead of a table when there is nothing to show.
pub const EMPTY_MESSAGE: &str = "There are no people in list!";

fn border() -> String {
    format!(
        "├-{}-⫟-{}⫟-{}-⫟-{}-⫟-{}-┤",
        "-".repeat(5),
        "-".repeat(25),
        "-".repeat(25),
        "-".repeat(25),
        "-".repeat(18)
    )
}

/// Print `people` as a numbered fixed-width table, or the placeholder
/// message when the sequence is empty. Rows keep the input order and are
/// numbered from 1.
pub fn render_table<'a, W, I>(people: I, out: &mut W) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Person>,
{
    let people: Vec<&Person> = people.into_iter().collect();
    if people.is_empty() {
        writeln!(out, "{}", EMPTY_MESSAGE)?;
        return Ok(());
    }

    let line = border();
    writeln!(out, "{}", line)?;
    writeln!(
        out,
        "| {:^5} | {:^24} | {:^25} | {:^25} | {:^18} |",
        "№", "Name", "Surname", "Telephone", "Birthday"
    )?;
    writeln!(out, "{}", line)?;
    for (number, person) in people.iter().enumerate() {
        writeln!(
            out,
            "| {:^5} | {:<24} | {:<25} | {:<25} | {:<18} |",
            number + 1,
            person.name,
            person.surname,
            person.telephone,
            person.birthday
        )?;
    }
    writeln!(out, "{}", line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(people: &[Person]) -> String {
        let mut out = Vec::new();
        render_table(people.iter(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_sequence_prints_placeholder() {
        let output = render(&[]);
        assert_eq!(output.trim_end(), EMPTY_MESSAGE);
        assert!(!output.contains('|'));
    }

    #[test]
    fn table_has_header_rows_and_borders() {
        let people = vec![
            Person::new("Ann", "Lee", "123", "05.03.1990"),
            Person::new("Bob", "Ray", "456", "01.12.2000"),
        ];
        let output = render(&people);
        let lines: Vec<&str> = output.lines().collect();

        // border, header, border, two rows, border
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[2], lines[5]);
        assert!(lines[1].contains("Name") && lines[1].contains("Birthday"));
        assert!(lines[3].contains("Ann") && lines[3].contains("  1  "));
        assert!(lines[4].contains("Bob") && lines[4].contains("  2  "));
    }

    #[test]
    fn all_lines_share_the_same_width() {
        let people = vec![Person::new("Ann", "Lee", "123", "05.03.1990")];
        let output = render(&people);
        let widths: Vec<usize> = output.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }
}
