//! Catalog command handlers.

use anyhow::{Context as _, Result};
use bookrev_core::api::{Book, CreateBook};
use comfy_table::{ContentArrangement, Table};

use super::Context;

pub async fn list(ctx: &Context, json: bool) -> Result<()> {
    let books = ctx
        .catalog()?
        .list_books()
        .await
        .context("Failed to load books")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
    } else if books.is_empty() {
        println!("No books found.");
    } else {
        println!("{}", books_table(&books));
    }
    Ok(())
}

pub async fn show(ctx: &Context, id: i64, json: bool) -> Result<()> {
    let book = ctx
        .catalog()?
        .get_book(id)
        .await
        .with_context(|| format!("Failed to load book {id}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        println!("ID:     {}", book.id);
        println!("Title:  {}", book.title);
        println!("Author: {}", book.author);
        println!("Genre:  {}", book.genre);
    }
    Ok(())
}

pub async fn add(ctx: &Context, title: &str, author: &str, genre: &str, json: bool) -> Result<()> {
    let book = ctx
        .catalog()?
        .create_book(&CreateBook::new(title, author, genre))
        .await
        .context("Failed to add book")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        println!("Book \"{}\" added successfully! (id {})", book.title, book.id);
    }
    Ok(())
}

fn books_table(books: &[Book]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["ID", "Title", "Author", "Genre"]);
    for book in books {
        table.add_row([
            book.id.to_string(),
            book.title.clone(),
            book.author.clone(),
            book.genre.clone(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_books_table_keeps_order() {
        let books = vec![
            Book {
                id: 2,
                title: "Emma".into(),
                author: "Jane Austen".into(),
                genre: "Classic".into(),
            },
            Book {
                id: 1,
                title: "Dune".into(),
                author: "Frank Herbert".into(),
                genre: "Sci-Fi".into(),
            },
        ];
        let rendered = books_table(&books).to_string();
        let emma = rendered.find("Emma").unwrap();
        let dune = rendered.find("Dune").unwrap();
        assert!(emma < dune);
        assert!(rendered.contains("Author"));
    }
}
