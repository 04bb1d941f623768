//! OptionStore 性能基准测试

use std::fs;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use serde_json::json;
use tempfile::TempDir;

use mmeson::meson::{BuildDir, Machine, OptionValue, Section, parse_array};
use mmeson::store::{MesonOption, OptionStore};

const SECTIONS: [Section; 7] = [
    Section::User,
    Section::Base,
    Section::Compiler,
    Section::Core,
    Section::Directory,
    Section::Test,
    Section::Backend,
];

/// 生成 n 个选项，逆序排列，模拟多个子项目
fn make_options(n: usize) -> Vec<MesonOption> {
    (0..n)
        .rev()
        .map(|i| {
            let name = match i % 4 {
                0 => format!("sub{}:opt_{:05}", i % 16, i),
                _ => format!("opt_{:05}", i),
            };
            let value = match i % 3 {
                0 => OptionValue::Boolean(i % 2 == 0),
                1 => OptionValue::Integer(i as i64),
                _ => OptionValue::String(format!("value-{}", i)),
            };
            MesonOption::new(
                name,
                value,
                "benchmark option",
                None,
                SECTIONS[i % SECTIONS.len()],
                Machine::Any,
            )
        })
        .collect()
}

fn make_build_dir(n: usize) -> (TempDir, BuildDir) {
    let temp = TempDir::new().unwrap();
    let info = temp.path().join("meson-info");
    fs::create_dir_all(&info).unwrap();
    fs::write(info.join("meson-info.json"), "{}").unwrap();

    let options: Vec<_> = (0..n)
        .map(|i| {
            json!({
                "name": format!("opt_{:05}", i),
                "value": i % 2 == 0,
                "section": "user",
                "machine": "any",
                "type": "boolean",
                "description": "benchmark option",
            })
        })
        .collect();
    fs::write(
        info.join("intro-buildoptions.json"),
        serde_json::to_string(&options).unwrap(),
    )
    .unwrap();

    let build_dir = BuildDir::open(temp.path()).unwrap();
    (temp, build_dir)
}

// ============== 加载与排序 ==============

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("option_store/load");

    for size in [100, 1_000, 5_000] {
        let options = make_options(size);
        group.bench_with_input(BenchmarkId::new("from_options", size), &options, |b, opts| {
            b.iter(|| OptionStore::from_options(black_box(opts.clone())));
        });

        let (_temp, build_dir) = make_build_dir(size);
        group.bench_with_input(BenchmarkId::new("from_disk", size), &build_dir, |b, dir| {
            b.iter(|| OptionStore::load(black_box(dir)).unwrap());
        });
    }

    group.finish();
}

// ============== 编辑 ==============

fn bench_edit(c: &mut Criterion) {
    let mut group = c.benchmark_group("option_store/edit");

    let mut store = OptionStore::from_options(make_options(1_000));
    let names: Vec<String> = store
        .options()
        .iter()
        .filter(|o| matches!(o.value(), OptionValue::Boolean(_)))
        .map(|o| o.name.clone())
        .collect();

    group.bench_function("toggle_all_then_discard", |b| {
        b.iter(|| {
            for name in &names {
                store.toggle(name).unwrap();
            }
            assert_eq!(store.discard(), names.len());
        });
    });

    group.bench_function("dirty_count_clean", |b| {
        b.iter(|| black_box(store.dirty_count()));
    });

    group.finish();
}

// ============== 数组解析 ==============

fn bench_parse_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("meson/parse_array");

    group.bench_function("bare", |b| {
        b.iter(|| parse_array(black_box("-O2, -g, -Wall, -Wextra")).unwrap());
    });

    group.bench_function("quoted", |b| {
        b.iter(|| parse_array(black_box(r#"['-DFOO=1', "-I/usr/include", 'it\'s']"#)).unwrap());
    });

    let long = format!(
        "[{}]",
        (0..200).map(|i| format!("'-Darg{}'", i)).collect::<Vec<_>>().join(", ")
    );
    group.bench_function("long_200", |b| {
        b.iter(|| parse_array(black_box(&long)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_load, bench_edit, bench_parse_array);
criterion_main!(benches);
