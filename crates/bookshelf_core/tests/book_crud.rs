use bookshelf_core::db::open_pool_in_memory;
use bookshelf_core::{
    BookAttributes, BookId, BookRepository, BookService, RepoError, ServiceError,
    SqliteBookRepository,
};

fn repo() -> SqliteBookRepository {
    SqliteBookRepository::new(open_pool_in_memory().unwrap())
}

#[test]
fn list_on_empty_table_is_empty() {
    let repo = repo();
    assert!(repo.list_books().unwrap().is_empty());
}

#[test]
fn create_and_get_roundtrip() {
    let repo = repo();

    let attrs = BookAttributes::new("12345678", "buku baru", "rizky");
    let id = repo.create_book(&attrs).unwrap();
    assert!(id.get() > 0);

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.attributes(), attrs);
}

#[test]
fn create_assigns_distinct_increasing_ids() {
    let repo = repo();

    let first = repo
        .create_book(&BookAttributes::new("1", "first", "a"))
        .unwrap();
    let second = repo
        .create_book(&BookAttributes::new("2", "second", "b"))
        .unwrap();
    assert!(second > first);

    let books = repo.list_books().unwrap();
    assert_eq!(books.len(), 2);
}

#[test]
fn get_missing_returns_none() {
    let repo = repo();
    assert!(repo.get_book(BookId::new(404)).unwrap().is_none());
}

#[test]
fn update_replaces_all_attributes() {
    let repo = repo();
    let id = repo
        .create_book(&BookAttributes::new("111", "draft", "someone"))
        .unwrap();

    let replacement = BookAttributes::new("666", "test", "ricky nyoo");
    assert_eq!(repo.update_book(id, &replacement).unwrap(), 1);

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded.attributes(), replacement);
}

#[test]
fn update_missing_affects_no_rows() {
    let repo = repo();
    let changed = repo
        .update_book(BookId::new(1), &BookAttributes::new("666", "test", "ricky nyoo"))
        .unwrap();
    assert_eq!(changed, 0);
    assert!(repo.list_books().unwrap().is_empty());
}

#[test]
fn delete_removes_row_and_reports_count() {
    let repo = repo();
    let keep = repo
        .create_book(&BookAttributes::new("1", "keep", "a"))
        .unwrap();
    let gone = repo
        .create_book(&BookAttributes::new("2", "gone", "b"))
        .unwrap();

    assert_eq!(repo.delete_book(gone).unwrap(), 1);
    assert_eq!(repo.delete_book(gone).unwrap(), 0);

    let remaining = repo.list_books().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep);
}

#[test]
fn attribute_values_are_bound_not_interpolated() {
    let repo = repo();
    let hostile = BookAttributes::new("1'; DROP TABLE book; --", "O'Reilly", "\"quoted\"");
    let id = repo.create_book(&hostile).unwrap();

    let loaded = repo.get_book(id).unwrap().unwrap();
    assert_eq!(loaded.attributes(), hostile);
    assert_eq!(repo.list_books().unwrap().len(), 1);
}

#[test]
fn null_text_column_is_reported_as_invalid_data() {
    let pool = open_pool_in_memory().unwrap();
    {
        let conn = pool.get().unwrap();
        conn.execute_batch(
            "DROP TABLE book;
             CREATE TABLE book (id INTEGER PRIMARY KEY, isbn TEXT, judul TEXT, pengarang TEXT);
             INSERT INTO book (id, isbn, judul, pengarang) VALUES (1, NULL, 'x', 'y');",
        )
        .unwrap();
    }

    let repo = SqliteBookRepository::new(pool);
    let err = repo.list_books().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("isbn")));
}

#[test]
fn externally_provisioned_zero_id_is_listed() {
    let pool = open_pool_in_memory().unwrap();
    pool.get()
        .unwrap()
        .execute_batch(
            "INSERT INTO book (id, isbn, judul, pengarang) VALUES (0, 'legacy', 'old', 'someone');",
        )
        .unwrap();

    let repo = SqliteBookRepository::new(pool);
    let books = repo.list_books().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].id, BookId::new(0));
    assert_eq!(repo.get_book(BookId::new(0)).unwrap().unwrap().isbn, "legacy");
}

#[test]
fn service_get_and_delete_report_not_found() {
    let service = BookService::new(repo());

    let err = service.get_book(BookId::new(9)).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(id) if id == BookId::new(9)));

    let err = service.delete_book(BookId::new(9)).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(id) if id == BookId::new(9)));
}

#[test]
fn service_create_returns_stored_book() {
    let service = BookService::new(repo());

    let created = service
        .create_book(BookAttributes::new("12345678", "buku baru", "rizky"))
        .unwrap();
    assert!(created.id.get() > 0);

    let fetched = service.get_book(created.id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(service.list_books().unwrap(), vec![created]);
}

#[test]
fn service_update_echoes_submission_even_without_row() {
    let service = BookService::new(repo());

    let updated = service
        .update_book(
            BookId::new(1),
            BookAttributes::new("666", "test", "ricky nyoo"),
        )
        .unwrap();
    assert_eq!(updated.id, BookId::new(1));
    assert_eq!(updated.isbn, "666");
    assert_eq!(updated.title, "test");
    assert_eq!(updated.author, "ricky nyoo");
    assert!(service.list_books().unwrap().is_empty());
}

#[test]
fn service_delete_existing_succeeds_once() {
    let service = BookService::new(repo());
    let created = service
        .create_book(BookAttributes::new("1", "t", "a"))
        .unwrap();

    service.delete_book(created.id).unwrap();
    assert!(matches!(
        service.delete_book(created.id),
        Err(ServiceError::NotFound(_))
    ));
}
