use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");
    println!("cargo:rerun-if-changed=../../data");

    // OUT_DIR is typically: target/debug/build/backend-xxx/out
    // config.toml goes to target/debug (or target/release) next to the binary
    let (Ok(out_dir), Ok(profile)) = (env::var("OUT_DIR"), env::var("PROFILE")) else {
        println!("cargo:warning=OUT_DIR/PROFILE not set, config.toml not copied");
        return;
    };

    let Some(target_dir) = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
    else {
        println!("cargo:warning=Target profile directory not found, config.toml not copied");
        return;
    };

    let Some(workspace_root) = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
    else {
        return;
    };

    let source_config = workspace_root.join("config.toml");
    let dest_config = target_dir.join("config.toml");

    if source_config.exists() {
        if let Err(e) = fs::copy(&source_config, &dest_config) {
            println!("cargo:warning=Failed to copy config.toml: {}", e);
        }
    } else {
        println!(
            "cargo:warning=config.toml not found at {:?}, using default config",
            source_config
        );
    }

    // Относительный путь датасета в config.toml должен работать и рядом с бинарником
    copy_data_dir(&workspace_root.join("data"), &target_dir.join("data"));
}

fn copy_data_dir(source: &Path, dest: &Path) {
    let Ok(entries) = fs::read_dir(source) else {
        println!("cargo:warning=data directory not found at {:?}", source);
        return;
    };
    if let Err(e) = fs::create_dir_all(dest) {
        println!("cargo:warning=Failed to create {:?}: {}", dest, e);
        return;
    }

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Err(e) = fs::copy(&path, dest.join(entry.file_name())) {
            println!("cargo:warning=Failed to copy {:?}: {}", path, e);
        }
    }
}
