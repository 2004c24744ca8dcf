use vfs_embedded::{EmbeddedFileProvider, FileInfo, MapStore, StaticStore, embedded_resources};

// compiled into the binary under the `Demo` namespace
static ASSETS: StaticStore = embedded_resources! {
    "Demo.Cargo.toml" => "../Cargo.toml",
    "Demo.docs.README.md" => "../README.md",
};

fn main() {
    env_logger::init();

    let provider = EmbeddedFileProvider::with_namespace(ASSETS, "Demo");

    // lists everything under `Demo.` as one flat directory
    for file in &provider.get_directory_contents("") {
        println!("{:<20} {:>8} bytes", file.name(), file.length().unwrap());
    }

    // `/` and `\` fold into `.`, so this resolves to `Demo.docs.README.md`
    let readme = provider.get_file_info("docs/README.md");
    assert!(readme.exists());
    let content = readme.create_read_stream().unwrap().read_all().unwrap();
    println!("{}", String::from_utf8_lossy(&content).lines().next().unwrap_or_default());

    // not found is a value, not an error
    let missing = provider.get_file_info("docs/missing.md");
    assert!(!missing.exists());
    println!("{} exists: {}", missing.name(), missing.exists());

    // the same names can be served from memory instead
    let mut store = MapStore::new();
    store.insert("Demo.hello.txt", "Hello, World!");
    let provider = EmbeddedFileProvider::with_namespace(store, "Demo");
    let hello = provider.get_file_info("hello.txt");
    println!(
        "{}",
        String::from_utf8(hello.create_read_stream().unwrap().read_all().unwrap()).unwrap()
    );
}
