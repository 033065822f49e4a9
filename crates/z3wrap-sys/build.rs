use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=wrapper.h");
    println!("cargo:rerun-if-env-changed=Z3_INCLUDE_DIR");
    println!("cargo:rerun-if-env-changed=Z3_LIB_DIR");

    if let Ok(lib_dir) = env::var("Z3_LIB_DIR") {
        println!("cargo:rustc-link-search=native={lib_dir}");
    }
    println!("cargo:rustc-link-lib=dylib=z3");

    let mut builder = bindgen::Builder::default().header("wrapper.h");
    if let Ok(include_dir) = env::var("Z3_INCLUDE_DIR") {
        builder = builder.clang_arg(format!("-I{include_dir}"));
    }

    let bindings = builder
        .allowlist_function("Z3_.*")
        .allowlist_type("Z3_.*")
        .allowlist_var("Z3_.*")
        // Z3_BOOL_SORT rather than Z3_sort_kind_Z3_BOOL_SORT
        .prepend_enum_name(false)
        .generate_comments(false)
        .layout_tests(false)
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .generate()
        .expect("Unable to generate Z3 bindings");

    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Couldn't write bindings!");
}
