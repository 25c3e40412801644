use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use list_grammar::{list_lexer, parse_with};
use parser_framework::ParserConfig;

// --- Data Generation ---

/// A list of `width` elements, each nested `depth` levels deep:
/// `[[[a, b=c]], [[a, b=c]], ...]`.
fn nested_list(width: usize, depth: usize) -> String {
    let leaf = format!("{}a, b=c{}", "[".repeat(depth), "]".repeat(depth));
    format!("[{}]", vec![leaf; width].join(", "))
}

/// `list = list`: the list alternative fails only at `=`, after the whole
/// left-hand side has been parsed.
fn assignment(width: usize, depth: usize) -> String {
    let list = nested_list(width, depth);
    format!("{list} = {list}")
}

fn token_count(input: &str) -> u64 {
    list_lexer(input).count() as u64
}

fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    let input = assignment(200, 4);
    group.throughput(Throughput::Elements(token_count(&input)));

    group.bench_function("tokenize_assignment", |b| {
        b.iter(|| list_lexer(black_box(input.as_str())).tokenize())
    });
    group.finish();
}

fn bench_speculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement");

    for width in [10, 100, 1_000] {
        let input = assignment(width, 4);
        group.throughput(Throughput::Elements(token_count(&input)));

        for (name, config) in [
            ("memo", ParserConfig::default()),
            ("no_memo", ParserConfig::default().with_memoization(false)),
        ] {
            group.bench_with_input(BenchmarkId::new(name, width), &input, |b, input| {
                b.iter(|| parse_with(list_lexer(input.as_str()), config))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_lexer, bench_speculation);
criterion_main!(benches);
