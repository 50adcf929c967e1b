use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spellcheck_core::{
    DelimiterRule, HeadlessEditor, MappedText, Settings, SpellChecker, SpellerInterface,
    Tokenizer, WordForSpeller,
};
use std::collections::HashSet;

const WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "spell", "checker",
];

struct Known(HashSet<&'static str>);

impl SpellerInterface for Known {
    fn check_words(&self, words: &[WordForSpeller]) -> Vec<bool> {
        words
            .iter()
            .map(|w| self.0.contains(w.text.as_str()))
            .collect()
    }
    fn get_suggestions(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }
    fn add_to_dictionary(&mut self, _word: &str) {}
    fn ignore_all(&mut self, _word: &str) {}
    fn is_working(&self) -> bool {
        true
    }
}

/// `line_count` lines of dictionary words with roughly one misspelling per 200 words.
fn large_text(line_count: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::with_capacity(line_count * 64);
    for _ in 0..line_count {
        for i in 0..10 {
            if i > 0 {
                out.push(' ');
            }
            if rng.gen_ratio(1, 200) {
                out.push_str("qwzxv");
            } else {
                out.push_str(WORDS[rng.gen_range(0..WORDS.len())]);
            }
        }
        out.push('\n');
    }
    out
}

fn checker(text: &str) -> SpellChecker<HeadlessEditor, Known> {
    SpellChecker::new(
        HeadlessEditor::new(text),
        Known(WORDS.iter().copied().collect()),
        Settings::default(),
    )
}

fn bench_tokenize(c: &mut Criterion) {
    let text = MappedText::from(large_text(5_000, 1).as_str());
    c.bench_function("tokenize/5k_lines", |b| {
        b.iter(|| {
            let tokenizer = Tokenizer::new(
                text.as_chars(),
                DelimiterRule::from_settings(&Settings::default()),
                false,
            );
            black_box(tokenizer.get_all_tokens().len());
        })
    });
}

fn bench_recheck_visible(c: &mut Criterion) {
    let text = large_text(50_000, 2);
    let mut sc = checker(&text);
    sc.editor_mut().set_viewport(25_000, 60);
    c.bench_function("recheck_visible/60_lines", |b| {
        b.iter(|| {
            sc.recheck_visible();
        })
    });
}

fn bench_find_next_wrap(c: &mut Criterion) {
    let text = large_text(20_000, 3);
    let mut sc = checker(&text);
    c.bench_function("find_next/20k_lines", |b| {
        b.iter(|| black_box(sc.find_next_mistake()))
    });
}

fn bench_list_all(c: &mut Criterion) {
    let text = large_text(20_000, 4);
    let sc = checker(&text);
    c.bench_function("list_all/20k_lines", |b| {
        b.iter(|| black_box(sc.get_all_misspellings_as_string().len()))
    });
}

fn bench_erase_all(c: &mut Criterion) {
    let text = large_text(5_000, 5);
    c.bench_function("erase_all/5k_lines", |b| {
        b.iter_batched(
            || checker(&text),
            |mut sc| black_box(sc.erase_all_misspellings()),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_recheck_visible,
    bench_find_next_wrap,
    bench_list_all,
    bench_erase_all
);
criterion_main!(benches);
