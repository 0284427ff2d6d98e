use criterion::{Criterion, black_box, criterion_group, criterion_main};
use levenshtein_search::distance::search_naive;
use levenshtein_search::{corpus, DictionaryBuilder};

const TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Vestibulum eros ipsum, tincidutn eu metus ut, commodo accumsan mi. Vestibulum porta, orci nec ullamcorper posuere, eros tortor pharetra est, at porttitor mi leo a velit. Aenean sollicitudin mauris elit, ultricies congue dui vulputate in. In hac habitasse platea dictumst. Nam iaculis sagittis justo a condimentum. Curabitur sed rhoncus dolor. Vivamus egestas congue lorem, in convallis magna viverra quis. Maecenas fringilla mollis arcu quis maximus. Maecenas tincidunt semper vestibulum. Donec aliquet leo at molestie elementum. Nulla venenatis iaculis gravida. Phasellus at pulvinar odio. Etiam bibendum tempor purus at dignissim. Nam a turpis ante. Etiam imperdiet justo sit amet quam tristique porttitor. Cras ultrices tellus et dolor lobortis tempor. Suspendisse eu mi nec nisi sollicitudin pharetra. Proin imperdiet elementum ullamcorper.";

const QUERIES: [&str; 3] = ["vestibulum", "porta", "et"];

fn benchmark_search(c: &mut Criterion) {
    let words: Vec<String> = corpus::words(TEXT).map(str::to_lowercase).collect();
    let dictionary = DictionaryBuilder::new().build(&words);

    for max_distance in [1, 2, 3] {
        c.bench_function(&format!("search_all k={max_distance}"), |b| {
            b.iter(|| {
                for query in QUERIES {
                    let _ = dictionary.search_all(black_box(query), max_distance);
                }
            });
        });

        c.bench_function(&format!("search_naive k={max_distance}"), |b| {
            b.iter(|| {
                for query in QUERIES {
                    let _ = search_naive(&words, black_box(query), max_distance);
                }
            });
        });
    }
}

criterion_group!(benches, benchmark_search);
criterion_main!(benches);
