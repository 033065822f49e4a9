//! Benchmarks for wrapper generation.
//!
//! Measures directive parsing on its own and full unit generation (scan,
//! emit, format) for declaration files of growing size.
//!
//! ## Profiling with Puffin
//!
//! ```bash
//! cargo bench --features profile-with-puffin -- --profile-time 5
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use z3_genwrap::{Directive, GenConfig, Generator, SourceFile};

#[cfg(feature = "profile-with-puffin")]
static FRAME_VIEW: std::sync::OnceLock<puffin::GlobalFrameView> = std::sync::OnceLock::new();

#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
    FRAME_VIEW.get_or_init(puffin::GlobalFrameView::default);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

/// Call at the end of each iteration to flush profiling data.
#[cfg(feature = "profile-with-puffin")]
fn end_profiling_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profile-with-puffin"))]
fn end_profiling_frame() {}

#[cfg(feature = "profile-with-puffin")]
fn print_profiling_stats() {
    let Some(frame_view) = FRAME_VIEW.get() else {
        println!("Profiler not initialized");
        return;
    };
    let view = frame_view.lock();
    println!("\n=== Profiling: {} frames recorded ===", view.recent_frames().count());
}

#[cfg(not(feature = "profile-with-puffin"))]
fn print_profiling_stats() {}

const DIRECTIVES: &[&str] = &[
    "//wrap:expr add x others... : Z3_mk_add x others...",
    "//wrap:expr lt:Bool l r : Z3_mk_lt l r",
    "//wrap:expr neg Z3_mk_unary_minus x",
    r#"//wrap:expr int_value:Int ctx:Context v:i64 : Z3_mk_int64 v:i64 "ctx.int_sort().raw()""#,
    "//wrap:expr extract x high:u32 low:u32 : Z3_mk_extract high:c_uint low:c_uint x",
];

/// A declaration file with `count` documented directives.
fn declaration_file(count: usize) -> String {
    let mut text = String::from("use crate::prelude::*;\n\n");
    for i in 0..count {
        let line = DIRECTIVES[i % DIRECTIVES.len()];
        // Keep method names unique.
        let line = line.replacen(' ', &format!(" m{i}_"), 1);
        text.push_str(&format!("// Method {i}.\n{line}\n\n"));
    }
    text
}

fn parse_benchmarks(c: &mut Criterion) {
    let config = GenConfig::new("Int");
    let mut group = c.benchmark_group("directive/parse");

    for (i, line) in DIRECTIVES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::from_parameter(i), line, |b, line| {
            b.iter(|| black_box(Directive::parse(black_box(line), &config).unwrap()));
        });
    }

    group.finish();
}

fn generate_benchmarks(c: &mut Criterion) {
    setup_profiler();

    let generator = Generator::new(GenConfig::new("Int"));
    let mut group = c.benchmark_group("generator/unit");

    for count in [1, 10, 100, 500] {
        let source = SourceFile::new("int.rs", declaration_file(count));
        group.throughput(Throughput::Bytes(source.text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &source, |b, source| {
            b.iter(|| {
                let out = generator.generate(std::slice::from_ref(black_box(source))).unwrap();
                end_profiling_frame();
                black_box(out.len())
            });
        });
    }

    group.finish();
    print_profiling_stats();
}

criterion_group!(benches, parse_benchmarks, generate_benchmarks);
criterion_main!(benches);
