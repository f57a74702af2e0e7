fn main() {
    // The desktop shell needs the generated Tauri context; the library and its
    // tests build without any of it.
    #[cfg(feature = "desktop")]
    tauri_build::build();
}
