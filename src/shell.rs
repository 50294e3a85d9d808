//! Interactive numbered menu over a catalog.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use book_catalog::{BookId, Catalog, CatalogError, Format, Query};

const MENU: &str = "
Library catalog
1. Add a book
2. Remove a book
3. Search for books
4. Show all books
5. Change a book's status
6. Save catalog to JSON
7. Load catalog from JSON
8. Save catalog to text file
9. Load catalog from text file
10. Exit
";

/// Reads menu choices from `input` until `10` or end of input.
pub struct Shell<R, W> {
    catalog: Catalog,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(catalog: Catalog, input: R, out: W) -> Self {
        Shell {
            catalog,
            input,
            out,
        }
    }

    #[cfg(test)]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.out, "{MENU}")?;
            let Some(choice) = self.prompt("Choose an action: ")? else {
                return Ok(());
            };

            match choice.trim() {
                "1" => self.add()?,
                "2" => self.remove()?,
                "3" => self.search()?,
                "4" => self.show_all()?,
                "5" => self.toggle()?,
                "6" => self.save(Format::Json)?,
                "7" => self.load(Format::Json)?,
                "8" => self.save(Format::Text)?,
                "9" => self.load(Format::Text)?,
                "10" => return Ok(()),
                _ => writeln!(self.out, "Invalid choice. Please pick a number from 1 to 10.")?,
            }
        }
    }

    /// Print `label` and read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn prompt_number<T: std::str::FromStr>(&mut self, label: &str) -> Result<Option<T>> {
        Ok(self
            .prompt(label)?
            .and_then(|value| value.trim().parse::<T>().ok()))
    }

    fn add(&mut self) -> Result<()> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(());
        };
        let Some(year) = self.prompt_number::<i64>("Year of publication: ")? else {
            writeln!(self.out, "The year must be a number.")?;
            return Ok(());
        };

        match self.catalog.add(title, author, year) {
            Ok(book) => {
                let message = format!(
                    "Added '{}' by {} ({}) with id {}.",
                    book.title(),
                    book.author(),
                    book.year(),
                    book.id()
                );
                writeln!(self.out, "{message}")?;
            }
            Err(err) => writeln!(self.out, "{err}")?,
        }
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        let Some(id) = self.prompt_number::<u64>("Id of the book to remove: ")? else {
            writeln!(self.out, "The id must be a number.")?;
            return Ok(());
        };

        if self.catalog.remove(BookId::new(id)) {
            writeln!(self.out, "Book {id} removed.")?;
        } else {
            writeln!(self.out, "There is no book with id {id}.")?;
        }
        Ok(())
    }

    fn search(&mut self) -> Result<()> {
        writeln!(self.out, "Search by:\n1. Title\n2. Author\n3. Year")?;
        let Some(criterion) = self.prompt("Choose a criterion: ")? else {
            return Ok(());
        };

        let query = match criterion.trim() {
            "1" => match self.prompt("Title: ")? {
                Some(title) => Query::new().title(title),
                None => return Ok(()),
            },
            "2" => match self.prompt("Author: ")? {
                Some(author) => Query::new().author(author),
                None => return Ok(()),
            },
            "3" => match self.prompt_number::<i64>("Year of publication: ")? {
                Some(year) => Query::new().year(year),
                None => {
                    writeln!(self.out, "The year must be a number.")?;
                    return Ok(());
                }
            },
            _ => {
                writeln!(self.out, "Invalid choice.")?;
                return Ok(());
            }
        };

        let books = self.catalog.find(&query);
        if books.is_empty() {
            writeln!(self.out, "No books match.")?;
            return Ok(());
        }
        writeln!(self.out, "Found {} book(s):", books.len())?;
        for (idx, book) in books.iter().enumerate() {
            writeln!(self.out, "{}. {}", idx + 1, book)?;
        }
        Ok(())
    }

    fn show_all(&mut self) -> Result<()> {
        for line in self.catalog.display() {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn toggle(&mut self) -> Result<()> {
        let Some(id) = self.prompt_number::<u64>("Id of the book: ")? else {
            writeln!(self.out, "The id must be a number.")?;
            return Ok(());
        };

        if self.catalog.toggle_status(BookId::new(id)) {
            writeln!(self.out, "Status of book {id} changed.")?;
        } else {
            writeln!(self.out, "There is no book with id {id}.")?;
        }
        Ok(())
    }

    /// Asks for a file name without extension and appends the format's one.
    fn file_name(&mut self, format: Format) -> Result<Option<PathBuf>> {
        let label = format!("File name (without .{}): ", format.extension());
        Ok(self
            .prompt(&label)?
            .map(|stem| PathBuf::from(format!("{}.{}", stem.trim(), format.extension()))))
    }

    fn save(&mut self, format: Format) -> Result<()> {
        let Some(path) = self.file_name(format)? else {
            return Ok(());
        };
        match self.catalog.save_to(&path, format) {
            Ok(()) => writeln!(self.out, "Catalog saved to {}.", path.display())?,
            Err(err) => writeln!(self.out, "{err}")?,
        }
        Ok(())
    }

    fn load(&mut self, format: Format) -> Result<()> {
        let Some(path) = self.file_name(format)? else {
            return Ok(());
        };
        match self.catalog.load_from(&path, format) {
            Ok(()) => writeln!(self.out, "Catalog loaded from {}.", path.display())?,
            Err(CatalogError::NotFound { path }) => {
                writeln!(self.out, "File {} does not exist.", path.display())?
            }
            Err(err) => writeln!(self.out, "{err}")?,
        }
        Ok(())
    }
}
