use std::path::PathBuf;

use rusqlite::Connection;
use tempfile::TempDir;

/// A database file inside a temp dir that lives as long as the fixture.
pub struct TestDb {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TestDb {
    pub fn new(setup: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(setup).unwrap();
        Self { _dir: dir, path }
    }

    pub fn connect(&self) -> Connection {
        Connection::open(&self.path).unwrap()
    }
}

/// Two tables: `products` and `users` (user 7 is named "a").
pub fn shop() -> TestDb {
    TestDb::new(
        "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL, email TEXT);
         CREATE TABLE products (id INTEGER PRIMARY KEY, name TEXT, price REAL);
         INSERT INTO users (id, name, email) VALUES (7, 'a', 'a@example.com');
         INSERT INTO users (id, name, email) VALUES (8, 'bob', NULL);
         INSERT INTO products (id, name, price) VALUES (1, 'Widget', 9.5);
         INSERT INTO products (id, name, price) VALUES (2, 'Gadget', 12.0);",
    )
}

/// One table `items` with ids 1..=count.
pub fn numbered_items(count: usize) -> TestDb {
    let mut setup = String::from("CREATE TABLE items (id INTEGER PRIMARY KEY, label TEXT);");
    for id in 1..=count {
        setup.push_str(&format!("INSERT INTO items (id, label) VALUES ({id}, 'item {id}');"));
    }
    TestDb::new(&setup)
}
