use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rlox_scanner::scan;

// A medium-size Lox source (~40 lines) with various constructs
const LOX_SOURCE: &str = r#"
// Fibonacci, the slow way
fun fib(n) {
    if (n < 2) return n;
    return fib(n - 1) + fib(n - 2);
}

class Point {
    init(x, y) {
        this.x = x;
        this.y = y;
    }

    length() {
        return this.x * this.x + this.y * this.y;
    }
}

var origin = Point(0, 0);
var unit = Point(1, 1);

for (var i = 0; i < 20; i = i + 1) {
    print fib(i);
}

var greeting = "hello, world";
var pi = 3.14159;
var truthy = true and !false or nil;

while (pi > 3) {
    pi = pi - 0.01;
    if (pi <= 3.1) {
        print "getting close";
    } else {
        print pi;
    }
}
"#;

// Dense operator/punctuation soup with no whitespace to skip
const TOKEN_SOUP: &str = "(){};,.-+*/!!====<=>=<>!=\"str\"123 4.56 foo bar_baz while";

fn bench_scan_program(c: &mut Criterion) {
    c.bench_function("scan_program", |b| {
        b.iter(|| scan(black_box(LOX_SOURCE)));
    });
}

fn bench_scan_token_soup(c: &mut Criterion) {
    c.bench_function("scan_token_soup", |b| {
        b.iter(|| scan(black_box(TOKEN_SOUP)));
    });
}

criterion_group!(benches, bench_scan_program, bench_scan_token_soup);
criterion_main!(benches);
