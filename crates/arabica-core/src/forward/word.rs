use serde::Serialize;
use tracing::trace;

use crate::rules::Rule;
use crate::script::{
    self, ALIF, ALIF_MADDA, ALIF_MAQSURA, BA, FATHA, FATHATAN, HA, KAF, KASRA, LAM, NUN, QAF,
    SHADDA, SUKUN, TA, TA_MARBUTA, WAW, YA,
};

use super::article::{self, Article};
use super::lookup::RuleLookup;
use super::segment::{self, Cluster};

/// One rendered word plus the facts the cross-word pass needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    /// Latin rendering before cross-word rules.
    pub text: String,
    /// The Arabic word as it appeared in the input.
    pub source: String,
    pub article: Article,
    pub ends_with_nun_sukun: bool,
    pub first_consonant: Option<char>,
}

/// Transduce one whitespace-free word. `None` when nothing renders.
pub(crate) fn transduce_word(
    source: &str,
    lookup: &RuleLookup,
    combinations: &[&Rule],
) -> Option<Word> {
    let article = article::detect_article(source, lookup);
    let substituted = segment::apply_combinations(source, combinations);
    let clusters = segment::clusters(&substituted, lookup);
    let text = WordTransducer::new(lookup, &clusters, &article).run();
    if text.trim().is_empty() {
        return None;
    }
    trace!(source, %text, ?article, "word");
    Some(Word {
        ends_with_nun_sukun: article::ends_with_nun_sukun(source) || text.ends_with('n'),
        first_consonant: article::first_consonant(source),
        source: source.to_string(),
        article,
        text,
    })
}

/// What a cluster's base letter is, for dispatch.
enum Letter<'a> {
    Latin,
    Alif,
    AlifMaqsura,
    AlifMadda,
    Glide {
        consonant: &'a str,
        short: char,
        long: char,
    },
    Hamza,
    TaMarbuta,
    Consonant(&'a str),
    Mark(&'a str),
    Literal(char),
    Unknown,
}

/// Left-to-right cluster transducer for a single word.
///
/// State carried between steps is the output so far (its last character
/// is the previously emitted vowel) and the one-shot shadda suppression
/// armed by a word-initial sun article.
pub(crate) struct WordTransducer<'a> {
    lookup: &'a RuleLookup<'a>,
    clusters: &'a [Cluster],
    article: &'a Article,
    out: String,
    suppress_shadda: bool,
}

fn is_passthrough(c: char) -> bool {
    !script::is_arabic_script(c) && (c.is_alphanumeric() || c == '-' || c == '\'')
}

fn lengthen(short: char) -> Option<char> {
    match short {
        'a' => Some('â'),
        'i' => Some('î'),
        'u' => Some('û'),
        _ => None,
    }
}

impl<'a> WordTransducer<'a> {
    pub(crate) fn new(
        lookup: &'a RuleLookup<'a>,
        clusters: &'a [Cluster],
        article: &'a Article,
    ) -> Self {
        Self {
            lookup,
            clusters,
            article,
            out: String::with_capacity(clusters.len() * 2),
            suppress_shadda: false,
        }
    }

    pub(crate) fn run(mut self) -> String {
        let mut pos = 0;
        while pos < self.clusters.len() {
            pos += self.step(pos);
        }
        self.out
    }

    fn classify(&self, c: char) -> Letter<'a> {
        if is_passthrough(c) {
            return Letter::Latin;
        }
        match c {
            ALIF => Letter::Alif,
            ALIF_MAQSURA => Letter::AlifMaqsura,
            ALIF_MADDA => Letter::AlifMadda,
            WAW => Letter::Glide {
                consonant: self.lookup.letter_or(WAW, "w"),
                short: 'u',
                long: 'û',
            },
            YA => Letter::Glide {
                consonant: self.lookup.letter_or(YA, "y"),
                short: 'i',
                long: 'î',
            },
            TA_MARBUTA => Letter::TaMarbuta,
            c if script::is_hamza(c) => Letter::Hamza,
            c => {
                if let Some(latin) = self.lookup.consonant(c) {
                    Letter::Consonant(latin)
                } else if let Some(latin) = self.lookup.mark(c) {
                    Letter::Mark(latin)
                } else if let Some(p) = script::arabic_punctuation_to_ascii(c) {
                    Letter::Literal(p)
                } else if let Some(d) = script::arabic_digit_to_ascii(c) {
                    Letter::Literal(d)
                } else if script::is_kept_punctuation(c) {
                    Letter::Literal(c)
                } else {
                    Letter::Unknown
                }
            }
        }
    }

    /// Process the cluster at `pos`; returns how many clusters were consumed.
    fn step(&mut self, pos: usize) -> usize {
        let clusters = self.clusters;
        let cluster = &clusters[pos];
        let letter = self.classify(cluster.base);
        if pos == 0 && !matches!(letter, Letter::Latin) {
            if let Some(consumed) = self.initial_article().or_else(|| self.clitic_article()) {
                return consumed;
            }
        }
        match letter {
            Letter::Latin => return self.latin(pos),
            Letter::Alif => {
                // Lam-alif is often typed with the fatha after the alif.
                let displaced = cluster.has(FATHA)
                    && pos > 0
                    && clusters[pos - 1].marks.is_empty()
                    && self.lookup.consonant(clusters[pos - 1].base).is_some();
                if displaced {
                    self.out.push('â');
                    let mut rest = cluster.marks.clone();
                    if let Some(i) = rest.iter().position(|&m| m == FATHA) {
                        rest.remove(i);
                    }
                    self.emit_marks(&rest);
                } else {
                    self.lengthen_last('a');
                    self.emit_marks(&cluster.marks);
                }
            }
            Letter::AlifMaqsura => {
                let after_tanwin = pos > 0 && clusters[pos - 1].has(FATHATAN);
                let lengthened = self.lengthen_last('a') || self.lengthen_last('i');
                if !lengthened && !self.out.ends_with('â') && !after_tanwin {
                    self.out.push('â');
                }
                self.emit_marks(&cluster.marks);
            }
            Letter::AlifMadda => {
                self.out.push('â');
                self.emit_marks(&cluster.marks);
            }
            Letter::Glide {
                consonant,
                short,
                long,
            } => self.glide(cluster, consonant, short, long),
            Letter::Hamza => return self.hamza(pos),
            Letter::TaMarbuta => self.ta_marbuta(cluster),
            Letter::Consonant(latin) => return self.consonant(pos, latin),
            Letter::Mark(latin) => {
                self.out.push_str(latin);
                self.emit_marks(&cluster.marks);
            }
            Letter::Literal(c) => {
                self.out.push(c);
                self.emit_marks(&cluster.marks);
            }
            Letter::Unknown => self.emit_marks(&cluster.marks),
        }
        1
    }

    fn emit_marks(&mut self, marks: &[char]) {
        for &m in marks {
            if let Some(latin) = self.lookup.mark(m) {
                self.out.push_str(latin);
            }
        }
    }

    /// Turn a trailing `short` vowel into its long form. Returns whether it did.
    fn lengthen_last(&mut self, short: char) -> bool {
        match lengthen(short) {
            Some(long) if self.out.ends_with(short) => {
                self.out.pop();
                self.out.push(long);
                true
            }
            _ => false,
        }
    }

    fn latin(&mut self, pos: usize) -> usize {
        let clusters = self.clusters;
        let cluster = &clusters[pos];
        // A clitic vowel already stands in for the fixed rendering's "A".
        let elide = matches!(self.article, Article::Allah)
            && matches!(cluster.base, 'A' | 'a')
            && clusters.get(pos + 1).is_some_and(|n| n.base == 'l')
            && self.out.ends_with(['a', 'i', 'u']);
        if !elide {
            self.out.push(cluster.base);
        }
        self.emit_marks(&cluster.marks);
        1
    }

    /// Word-initial alif + lam.
    fn initial_article(&mut self) -> Option<usize> {
        let clusters = self.clusters;
        let alif = clusters.first()?;
        let lam = clusters.get(1)?;
        if !script::is_article_alif(alif.base) || lam.base != LAM {
            return None;
        }
        if lam.has(SHADDA) && self.article.is_some() {
            self.out.push_str("al-l");
            if !lam.has(SUKUN) {
                if let Some(v) = self.lookup.vowel_of(&lam.marks) {
                    self.out.push_str(v);
                }
            }
            return Some(2);
        }
        match self.article {
            Article::Sun(latin) if !latin.is_empty() => {
                self.out.push('a');
                self.out.push_str(latin);
                self.out.push('-');
                self.suppress_shadda = true;
                Some(2)
            }
            Article::Moon => {
                self.out.push_str("al-");
                Some(2)
            }
            Article::Allah => {
                self.out.push('a');
                Some(2)
            }
            _ if alif.marks.is_empty() => {
                self.out.push('a');
                Some(1)
            }
            _ => None,
        }
    }

    /// Clitic (bi-, ka-, fa-, wa-) + alif + article lam, or li- + lam.
    fn clitic_article(&mut self) -> Option<usize> {
        if !self.article.is_some() {
            return None;
        }
        let clusters = self.clusters;
        let prefix = clusters.first()?;
        if prefix.base == LAM && prefix.has(KASRA) && clusters.get(1)?.base == LAM {
            return Some(self.li_article());
        }
        let alif = clusters.get(1)?;
        let lam = clusters.get(2)?;
        if !script::is_clitic_prefix(prefix.base)
            || !script::is_article_alif(alif.base)
            || lam.base != LAM
        {
            return None;
        }
        self.out
            .push_str(self.lookup.letter(prefix.base).unwrap_or_default());
        if let Some(v) = self.lookup.short_vowel_of(&prefix.marks) {
            self.out.push_str(v);
        }
        // The lam itself is doubled: render it as the root's first consonant.
        if lam.has(SHADDA) {
            return Some(2);
        }
        if let Article::Moon = self.article {
            self.out.push_str("l-");
        }
        Some(3)
    }

    /// li- with the article's alif elided (لِل).
    fn li_article(&mut self) -> usize {
        let clusters = self.clusters;
        let lam = &clusters[1];
        self.out.push_str(self.lookup.letter_or(LAM, "l"));
        if let Some(v) = self.lookup.short_vowel_of(&clusters[0].marks) {
            self.out.push_str(v);
        }
        if lam.has(SHADDA) {
            return 1;
        }
        match self.article {
            Article::Sun(latin) if !latin.is_empty() => 2,
            Article::Moon => {
                self.out.push_str("l-");
                2
            }
            _ => 1,
        }
    }

    fn glide(&mut self, cluster: &Cluster, consonant: &str, short: char, long: char) {
        let sukun = cluster.has(SUKUN);
        let shadda = cluster.has(SHADDA);
        let explicit_vowel = cluster
            .marks
            .iter()
            .any(|&m| script::is_short_vowel_mark(m));
        if (sukun || !explicit_vowel) && !shadda && self.lengthen_last(short) {
            return;
        }
        if sukun && !explicit_vowel {
            self.out.push(long);
            return;
        }
        self.out.push_str(consonant);
        if shadda {
            self.out.push_str(consonant);
        }
        if !sukun {
            if let Some(v) = self.lookup.vowel_of(&cluster.marks) {
                self.out.push_str(v);
            }
        }
    }

    fn hamza(&mut self, pos: usize) -> usize {
        let clusters = self.clusters;
        let cluster = &clusters[pos];
        if self.out.is_empty() || self.out.ends_with('-') {
            self.emit_marks(&cluster.marks);
            return 1;
        }
        if clusters
            .get(pos + 1)
            .is_some_and(|n| script::is_pause_punctuation(n.base))
        {
            self.out.push('\'');
            return 1;
        }
        self.out.push('-');
        self.emit_marks(&cluster.marks);
        1
    }

    fn ta_marbuta(&mut self, cluster: &Cluster) {
        let vowel = self.lookup.short_vowel_of(&cluster.marks);
        let tanwin = cluster
            .marks
            .iter()
            .find(|&&m| script::is_tanwin(m))
            .and_then(|&m| self.lookup.mark(m));
        match vowel.or(tanwin) {
            Some(ending) => {
                self.out.push_str(self.lookup.letter_or(TA, "t"));
                self.out.push_str(ending);
            }
            None => self.out.push_str(self.lookup.letter_or(HA, "h")),
        }
    }

    fn consonant(&mut self, pos: usize, latin: &str) -> usize {
        let clusters = self.clusters;
        let cluster = &clusters[pos];
        let next = clusters.get(pos + 1).map(|n| n.base);

        let mut marks: Vec<char> = cluster.marks.clone();
        if self.suppress_shadda && script::is_sun_letter(cluster.base) {
            marks.retain(|&m| m != SHADDA);
            self.suppress_shadda = false;
        }
        let shadda = marks.contains(&SHADDA);
        let vowelless = marks.contains(&SUKUN) || next.is_some_and(script::is_pause_punctuation);

        if cluster.base == NUN && vowelless {
            match next {
                Some(QAF | KAF) => {
                    self.out.push_str("ng");
                    return 1;
                }
                Some(BA) => {
                    self.out.push('m');
                    return 1;
                }
                _ => {}
            }
        }

        self.out.push_str(latin);
        if shadda {
            self.out.push_str(latin);
        }

        if marks.contains(&FATHATAN) && next == Some(ALIF) {
            let tanwin = self.lookup.mark(FATHATAN).unwrap_or("an");
            let at_pause = clusters
                .get(pos + 2)
                .is_some_and(|c| script::is_pause_punctuation(c.base));
            if at_pause {
                self.out.push_str(tanwin.strip_suffix('n').unwrap_or(tanwin));
            } else {
                self.out.push_str(tanwin);
                self.emit_marks(&clusters[pos + 1].marks);
            }
            return 2;
        }

        if !vowelless {
            if let Some(v) = self.lookup.vowel_of(&marks) {
                self.out.push_str(v);
            }
        }
        1
    }
}
