use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tubelink::extractor::{probe, resolve};
use tubelink::links::{FormatSlot, LinkBuilder, SubtitleRequest};
use tubelink::FormatDescriptor;

fn benchmark_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("URL Resolution");

    group.bench_function("watch", |b| {
        b.iter(|| resolve(black_box("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42")))
    });

    group.bench_function("bare host", |b| {
        b.iter(|| resolve(black_box("music.youtube.com/watch?v=dQw4w9WgXcQ")))
    });

    group.bench_function("short link", |b| {
        b.iter(|| resolve(black_box("youtu.be/dQw4w9WgXcQ")))
    });

    group.bench_function("unsupported", |b| {
        b.iter(|| resolve(black_box("vimeo.com/123456")))
    });

    group.bench_function("probe", |b| {
        b.iter(|| probe(black_box("https://www.youtube.com/watch?v=dQw4w9WgXcQ")))
    });

    group.finish();
}

fn benchmark_build_download(c: &mut Criterion) {
    let mut group = c.benchmark_group("Link Building");
    let links = LinkBuilder::new("https://dl.example.org").expect("valid base");
    let format = |id: &str| {
        FormatSlot::Format(FormatDescriptor {
            id: id.to_string(),
            note: String::new(),
            audio: None,
            video: None,
        })
    };
    let (video, audio) = (format("137"), format("251"));
    let request = SubtitleRequest::new("en", "srt");

    group.bench_function("muxed", |b| {
        b.iter(|| links.build_download(black_box("dQw4w9WgXcQ"), &video, &audio, None))
    });

    group.bench_function("muxed with subtitles", |b| {
        b.iter(|| links.build_download(black_box("dQw4w9WgXcQ"), &video, &audio, Some(&request)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_resolve, benchmark_build_download);
criterion_main!(benches);
