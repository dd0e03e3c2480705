#[macro_use]
extern crate bencher;

use bencher::{black_box, Bencher};

use weburl::Url;

fn short(bench: &mut Bencher) {
    let url = "https://example.com/bench";
    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn long(bench: &mut Bencher) {
    let url = "https://example.com/parkbench?tre=es&st=uff";
    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn fragment(bench: &mut Bencher) {
    let url = "https://example.com/parkbench?tre=es&st=uff#fragment";
    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn plain(bench: &mut Bencher) {
    let url = "https://example.com/";
    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn port(bench: &mut Bencher) {
    let url = "https://example.com:8080";
    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn hyphen(bench: &mut Bencher) {
    let url = "https://hyphenated-example.com/";
    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn ipv6(bench: &mut Bencher) {
    let url = "https://[2001:db8::ff00:42:8329]/foo/bar";
    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn unicode_host(bench: &mut Bencher) {
    let url = "https://xn--mgbh0fb.example/";
    bench.bytes = url.len() as u64;
    bench.iter(|| black_box(url).parse::<Url>().unwrap());
}

fn relative_against_base(bench: &mut Bencher) {
    let base = Url::parse("https://example.com/a/b/c").unwrap();
    bench.iter(|| black_box(&base).join("../d/e?f#g").unwrap());
}

fn set_query(bench: &mut Bencher) {
    let template = Url::parse("https://example.com/a/b").unwrap();
    bench.iter(|| {
        let mut url = black_box(template.clone());
        url.set_query("q=1&r=2").unwrap();
        url
    });
}

benchmark_group!(
    benches,
    short,
    long,
    fragment,
    plain,
    port,
    hyphen,
    ipv6,
    unicode_host,
    relative_against_base,
    set_query,
);
benchmark_main!(benches);
