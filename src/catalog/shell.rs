use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use crate::catalog::controller::CatalogController;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

const MENU_ITEMS: [&str; 7] = [
    "1. Add Book",
    "2. Issue Book",
    "3. Return Book",
    "4. View All Books",
    "5. Search by Title",
    "6. Search by ISBN",
    "7. Exit",
];

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MenuChoice {
    AddBook,
    IssueBook,
    ReturnBook,
    ViewAll,
    SearchByTitle,
    SearchByIsbn,
    Exit,
}

impl TryFrom<&str> for MenuChoice {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddBook),
            "2" => Ok(MenuChoice::IssueBook),
            "3" => Ok(MenuChoice::ReturnBook),
            "4" => Ok(MenuChoice::ViewAll),
            "5" => Ok(MenuChoice::SearchByTitle),
            "6" => Ok(MenuChoice::SearchByIsbn),
            "7" => Ok(MenuChoice::Exit),
            other => Err(format!("invalid menu choice {:?}", other)),
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Interactive menu loop over any line-oriented reader and writer.
///
/// Only a failure of the reader or writer ends the loop with an error; every
/// catalog error is answered with a message and the menu is shown again.
/// End of input is treated like choosing Exit.
pub struct Shell<R, W> {
    library_name: String,
    controller: CatalogController,
    reader: R,
    writer: W,
}

impl<R, W> Shell<R, W>
    where R: AsyncBufRead + Unpin + Send,
          W: AsyncWrite + Unpin + Send {
    pub fn new(config: &Configuration, catalog_service: Arc<dyn CatalogService>, reader: R, writer: W) -> Self {
        Self {
            library_name: config.library_name.to_string(),
            controller: CatalogController::new(catalog_service),
            reader,
            writer,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub async fn run(&mut self) -> LibraryResult<()> {
        loop {
            self.print_menu().await?;
            let Some(choice) = self.prompt("Enter your choice (1-7): ").await? else {
                break;
            };
            match MenuChoice::try_from(choice.as_str()) {
                Ok(choice) => {
                    if let Flow::Exit = self.dispatch(choice).await? {
                        break;
                    }
                }
                Err(err) => {
                    tracing::debug!(error = err.as_str(), "rejected menu input");
                    self.write_line("Invalid choice. Please enter 1-7.").await?;
                }
            }
        }
        let goodbye = format!("Thank you for using {}. Goodbye!", self.library_name);
        self.write_line(goodbye.as_str()).await?;
        tracing::info!("application closed");
        Ok(())
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> LibraryResult<Flow> {
        let reply = match choice {
            MenuChoice::AddBook => {
                let Some(title) = self.prompt("Enter book title: ").await? else { return Ok(Flow::Exit) };
                let Some(author) = self.prompt("Enter author name: ").await? else { return Ok(Flow::Exit) };
                let Some(isbn) = self.prompt("Enter ISBN: ").await? else { return Ok(Flow::Exit) };
                self.controller.add_book(&title, &author, &isbn).await
            }
            MenuChoice::IssueBook => {
                let Some(isbn) = self.prompt("Enter ISBN of book to issue: ").await? else { return Ok(Flow::Exit) };
                self.controller.issue_book(&isbn).await
            }
            MenuChoice::ReturnBook => {
                let Some(isbn) = self.prompt("Enter ISBN of book to return: ").await? else { return Ok(Flow::Exit) };
                self.controller.return_book(&isbn).await
            }
            MenuChoice::ViewAll => {
                self.controller.list_books().await
            }
            MenuChoice::SearchByTitle => {
                let Some(title) = self.prompt("Enter title to search: ").await? else { return Ok(Flow::Exit) };
                self.controller.search_by_title(&title).await
            }
            MenuChoice::SearchByIsbn => {
                let Some(isbn) = self.prompt("Enter ISBN to search: ").await? else { return Ok(Flow::Exit) };
                self.controller.search_by_isbn(&isbn).await
            }
            MenuChoice::Exit => {
                return Ok(Flow::Exit);
            }
        };
        self.write_line(reply.as_str()).await?;
        Ok(Flow::Continue)
    }

    async fn print_menu(&mut self) -> LibraryResult<()> {
        let header = format!("\n=== {} ===", self.library_name);
        self.write_line(header.as_str()).await?;
        for item in MENU_ITEMS {
            self.write_line(item).await?;
        }
        Ok(())
    }

    // Writes the prompt and reads one trimmed line, `None` at end of input.
    async fn prompt(&mut self, text: &str) -> LibraryResult<Option<String>> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn write_line(&mut self, text: &str) -> LibraryResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use crate::catalog::factory;
    use crate::catalog::shell::{MENU_ITEMS, MenuChoice, Shell};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    const PROMPT: &str = "Enter your choice (1-7): ";

    fn menu(name: &str) -> String {
        format!("\n=== {} ===\n{}\n", name, MENU_ITEMS.join("\n"))
    }

    async fn run_session(config: &Configuration, store: RepositoryStore, input: &str) -> String {
        let svc = factory::create_catalog_service(config, store).await;
        let mut shell = Shell::new(config, svc, input.as_bytes(), Vec::new());
        shell.run().await.expect("shell should finish");
        String::from_utf8(shell.into_writer()).expect("utf8 output")
    }

    #[tokio::test]
    async fn test_should_parse_menu_choice() {
        assert_eq!(Ok(MenuChoice::AddBook), MenuChoice::try_from(" 1 "));
        assert_eq!(Ok(MenuChoice::Exit), MenuChoice::try_from("7"));
        assert!(MenuChoice::try_from("8").is_err());
        assert!(MenuChoice::try_from("add").is_err());
    }

    #[tokio::test]
    async fn test_should_report_empty_catalog_and_exit() {
        let output = run_session(&Configuration::new("test"), RepositoryStore::Memory, "4\n7\n").await;
        let expected = format!("{menu}{PROMPT}no books in the inventory\n{menu}{PROMPT}Thank you for using test. Goodbye!\n",
                               menu = menu("test"));
        assert_eq!(expected, output);
    }

    #[tokio::test]
    async fn test_should_treat_end_of_input_as_exit() {
        let output = run_session(&Configuration::new("test"), RepositoryStore::Memory, "").await;
        assert_eq!(format!("{}{}Thank you for using test. Goodbye!\n", menu("test"), PROMPT), output);
    }

    #[tokio::test]
    async fn test_should_stop_when_input_ends_mid_prompt() {
        let output = run_session(&Configuration::new("test"), RepositoryStore::Memory, "1\nDune\n").await;
        assert!(output.ends_with("Enter author name: Thank you for using test. Goodbye!\n"));
        assert!(!output.contains("Book added successfully!"));
    }

    #[tokio::test]
    async fn test_should_keep_running_after_errors() {
        let input = "9\n1\n\nauthor\nisbn\n2\nmissing\n3\nmissing\n6\nmissing\n5\ndune\n7\n";
        let output = run_session(&Configuration::new("test"), RepositoryStore::Memory, input).await;
        assert!(output.contains("Invalid choice. Please enter 1-7.\n"));
        assert!(output.contains("Enter ISBN: Error: All fields are required.\n"));
        assert!(output.contains("Enter ISBN of book to issue: Book not found.\n"));
        assert!(output.contains("Enter ISBN of book to return: Book not found.\n"));
        assert!(output.contains("Enter ISBN to search: Book not found.\n"));
        assert!(output.contains("Enter title to search: No books found.\n"));
        assert_eq!(7, output.matches("=== test ===").count());
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[tokio::test]
    async fn test_should_run_full_session() {
        let input = "1\nThe Great Gatsby\nF. Scott Fitzgerald\n978-0-7432-7356-5\n\
                     1\nAnother\nSomeone\n978-0-7432-7356-5\n\
                     2\n978-0-7432-7356-5\n\
                     2\n978-0-7432-7356-5\n\
                     5\ngreat\n\
                     3\n978-0-7432-7356-5\n\
                     3\n978-0-7432-7356-5\n\
                     4\n7\n";
        let output = run_session(&Configuration::new("test"), RepositoryStore::Memory, input).await;
        let mut rest = output.as_str();
        for expected in [
            "Enter ISBN: Book added successfully!\n",
            "Enter ISBN: Error: book with ISBN 978-0-7432-7356-5 already exists\n",
            "Enter ISBN of book to issue: Book issued successfully!\n",
            "Enter ISBN of book to issue: Book is not available.\n",
            "Enter title to search: 'The Great Gatsby' by F. Scott Fitzgerald (ISBN: 978-0-7432-7356-5) - ISSUED\n",
            "Enter ISBN of book to return: Book returned successfully!\n",
            "Enter ISBN of book to return: Book was not issued.\n",
            "Enter your choice (1-7): 1. 'The Great Gatsby' by F. Scott Fitzgerald (ISBN: 978-0-7432-7356-5) - AVAILABLE\n",
            "Enter your choice (1-7): Thank you for using test. Goodbye!\n",
        ] {
            let pos = rest.find(expected).unwrap_or_else(|| panic!("missing {:?} in {:?}", expected, rest));
            rest = &rest[pos + expected.len()..];
        }
        assert_eq!("", rest);
    }

    #[tokio::test]
    async fn test_should_persist_between_sessions() {
        let dir = TempDir::new().expect("temp dir");
        let config = Configuration::new("test").with_catalog_path(dir.path().join("catalog.json"));

        let _ = run_session(&config, RepositoryStore::JsonFile, "1\n1984\nGeorge Orwell\n978-0-451-52494-2\n2\n978-0-451-52494-2\n7\n").await;
        let output = run_session(&config, RepositoryStore::JsonFile, "6\n978-0-451-52494-2\n7\n").await;
        assert!(output.contains("Enter ISBN to search: '1984' by George Orwell (ISBN: 978-0-451-52494-2) - ISSUED\n"));
    }
}
