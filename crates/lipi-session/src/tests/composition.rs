use super::*;

// --- Inscript ---

#[test]
fn test_inscript_consonant_and_sign_compose() {
    let mut e = engine(TransliterationMode::Inscript);

    assert_eq!(
        e.feed(InputUnit::key("k", false)),
        Feed::Accepted { committed: vec![] }
    );
    assert_eq!(e.pending_text(), "क");

    assert_eq!(
        e.feed(InputUnit::key("f", false)),
        Feed::Accepted {
            committed: vec!["कि".to_string()]
        }
    );
    assert_eq!(e.committed().len(), 1);
    assert_eq!(e.committed()[0].raw_count(), 2);
    assert!(!e.has_pending());
}

#[test]
fn test_inscript_consonant_flushed_by_next_consonant() {
    let mut e = engine(TransliterationMode::Inscript);
    let out = feed_keys(&mut e, &[("k", false), ("l", false)]);
    assert_eq!(out, vec!["क"]);
    assert_eq!(e.pending_text(), "त");
    assert_eq!(e.flush(), vec!["त"]);
    assert_eq!(e.committed().len(), 2);
    assert_eq!(e.committed_text(), "कत");
}

#[test]
fn test_inscript_dom_codes_and_shift() {
    let mut e = engine(TransliterationMode::Inscript);
    feed_keys(&mut e, &[("KeyK", true), ("KeyE", false)]);
    assert_eq!(e.committed_text(), "खा");

    // The shifted identifier resolves to the shifted output on its own.
    let mut e = engine(TransliterationMode::Inscript);
    feed_keys(&mut e, &[("K", false)]);
    assert_eq!(e.pending_text(), "ख");
}

#[test]
fn test_inscript_virama_closes_cluster() {
    let mut e = engine(TransliterationMode::Inscript);
    let out = feed_keys(&mut e, &[("k", false), ("d", false), ("k", false)]);
    assert_eq!(out, vec!["क्"]);
    e.flush();
    assert_eq!(e.committed_text(), "क्क");
}

#[test]
fn test_inscript_rakar_stays_held() {
    let mut e = engine(TransliterationMode::Inscript);
    let out = feed_keys(&mut e, &[("k", false), ("#", false)]);
    assert!(out.is_empty());
    assert_eq!(e.pending_text(), "क्र");

    let out = feed_keys(&mut e, &[("f", false)]);
    assert_eq!(out, vec!["क्रि"]);
    assert_eq!(e.committed()[0].raw_count(), 3);
}

#[test]
fn test_inscript_nukta_then_sign() {
    let mut e = engine(TransliterationMode::Inscript);
    let out = feed_keys(&mut e, &[("p", false), ("]", false), ("e", false)]);
    assert_eq!(out, vec!["ज\u{093C}ा"]);
}

#[test]
fn test_inscript_space_flushes_held() {
    let mut e = engine(TransliterationMode::Inscript);
    let out = feed_keys(&mut e, &[("k", false), ("Space", false)]);
    assert_eq!(out, vec!["क", " "]);
}

#[test]
fn test_unmapped_key_ignored() {
    let mut e = engine(TransliterationMode::Inscript);
    feed_keys(&mut e, &[("k", false)]);
    assert_eq!(e.feed(InputUnit::key("F1", false)), Feed::Ignored);
    assert_eq!(e.feed(InputUnit::key("Tab", false)), Feed::Ignored);
    assert_eq!(e.pending_text(), "क");
    assert!(e.committed().is_empty());
}

#[test]
fn test_last_key_tracks_resolved_definition() {
    let mut e = engine(TransliterationMode::Inscript);
    assert!(e.last_key().is_none());
    feed_keys(&mut e, &[("KeyK", false)]);
    assert_eq!(e.last_key().map(|k| k.key.as_str()), Some("k"));
    e.feed(InputUnit::key("F1", false));
    assert_eq!(e.last_key().map(|k| k.key.as_str()), Some("k"));
}

// --- Orphan signs ---

#[test]
fn test_orphan_sign_standalone() {
    let mut e = engine_with(TransliterationMode::Inscript, OrphanSignPolicy::Standalone);
    assert_eq!(feed_keys(&mut e, &[("f", false)]), vec!["ि"]);
}

#[test]
fn test_orphan_sign_independent() {
    let mut e = engine_with(TransliterationMode::Inscript, OrphanSignPolicy::Independent);
    assert_eq!(feed_keys(&mut e, &[("f", false)]), vec!["इ"]);
    // Anusvara has no independent form.
    assert_eq!(feed_keys(&mut e, &[("x", false)]), vec!["ं"]);
}

#[test]
fn test_orphan_sign_drop() {
    let mut e = engine_with(TransliterationMode::Inscript, OrphanSignPolicy::Drop);
    assert_eq!(e.feed(InputUnit::key("f", false)), Feed::Ignored);
    assert!(!e.can_undo());
    // Still composes when a consonant is held.
    assert_eq!(feed_keys(&mut e, &[("k", false), ("f", false)]), vec!["कि"]);
}

#[test]
fn test_phonetic_orphan_sign_drop_leaves_no_undo_entry() {
    let mut e = engine_with(TransliterationMode::Phonetic, OrphanSignPolicy::Drop);
    assert_eq!(feed_str(&mut e, "ka "), vec!["क", " "]);
    assert_eq!(e.feed(InputUnit::Char('M')), Feed::Ignored);
    assert!(!e.has_pending());
    feed_str(&mut e, " ");
    assert_eq!(e.undo(), Some(vec![" ".to_string()]));
    // The next undo reaches the space typed before the dropped sign, which
    // had committed both units.
    assert_eq!(e.undo(), Some(vec!["क".to_string(), " ".to_string()]));
    assert_eq!(e.committed_text(), "");
    assert_eq!(e.pending_text(), "कa");
    // Anusvara still attaches to a held consonant.
    feed_str(&mut e, " gM");
    assert_eq!(e.committed_text(), "क गं");
}

// --- Remington ---

#[test]
fn test_remington_matra() {
    let mut e = engine(TransliterationMode::Remington);
    let out = feed_keys(&mut e, &[("d", false), ("k", false), ("r", false), ("f", false)]);
    assert_eq!(out, vec!["का", "ति"]);
}

#[test]
fn test_remington_half_form_commits_immediately() {
    let mut e = engine(TransliterationMode::Remington);
    let out = feed_keys(&mut e, &[("e", true), ("j", false), ("h", false)]);
    assert_eq!(out, vec!["म्", "री"]);
    assert_eq!(e.committed_text(), "म्री");
}

#[test]
fn test_remington_rakar_key() {
    let mut e = engine(TransliterationMode::Remington);
    let out = feed_keys(&mut e, &[("d", false), ("z", false), ("k", false)]);
    assert_eq!(out, vec!["क्रा"]);
}

// --- Phonetic ---

#[test]
fn test_phonetic_namaste() {
    let mut e = engine(TransliterationMode::Phonetic);
    let out = feed_str(&mut e, "namaste");
    assert_eq!(out, vec!["न", "म", "स्"]);
    assert_eq!(e.pending_text(), "तe");
    e.flush();
    assert_eq!(e.committed_text(), "नमस्ते");
}

#[test]
fn test_phonetic_longest_match_waits() {
    let mut e = engine(TransliterationMode::Phonetic);
    feed_str(&mut e, "k");
    assert_eq!(e.pending_text(), "k");
    // "kh" cannot grow further, so it resolves at once.
    feed_str(&mut e, "h");
    assert_eq!(e.pending_text(), "ख");
    feed_str(&mut e, "a");
    assert_eq!(e.pending_text(), "खa");
    assert_eq!(feed_str(&mut e, "a"), vec!["खा"]);
    assert!(!e.has_pending());
}

#[test]
fn test_phonetic_conjunct_and_inherent_vowel() {
    let mut e = engine(TransliterationMode::Phonetic);
    feed_str(&mut e, "kk");
    e.flush();
    assert_eq!(e.committed_text(), "क्क");

    let mut e = engine(TransliterationMode::Phonetic);
    feed_str(&mut e, "hindi");
    e.flush();
    assert_eq!(e.committed_text(), "हिन्दि");
}

#[test]
fn test_phonetic_conjuncts_disabled() {
    let options = EngineOptions {
        orphan_sign: OrphanSignPolicy::Standalone,
        join_conjuncts: false,
    };
    let mut e = EngineState::with_options(TransliterationMode::Phonetic, options).unwrap();
    feed_str(&mut e, "kk");
    e.flush();
    assert_eq!(e.committed_text(), "कक");
}

#[test]
fn test_phonetic_independent_vowels_and_symbols() {
    let mut e = engine(TransliterationMode::Phonetic);
    feed_str(&mut e, "ai kaM.");
    e.flush();
    assert_eq!(e.committed_text(), "ऐ कं।");
}

#[test]
fn test_phonetic_unknown_char_ignored() {
    let mut e = engine(TransliterationMode::Phonetic);
    assert_eq!(e.feed(InputUnit::Char('@')), Feed::Ignored);
    assert_eq!(e.feed(InputUnit::Char('क')), Feed::Ignored);
    assert!(!e.has_pending());
}

#[test]
fn test_phonetic_accepts_dom_codes() {
    let mut e = engine(TransliterationMode::Phonetic);
    feed_keys(&mut e, &[("KeyK", false), ("KeyA", false), ("KeyA", false)]);
    assert_eq!(e.committed_text(), "का");

    let mut e = engine(TransliterationMode::English);
    assert_eq!(
        feed_keys(&mut e, &[("KeyH", true), ("Digit1", false)]),
        vec!["H", "1"]
    );
}

// --- English pass-through ---

#[test]
fn test_english_passthrough() {
    let mut e = engine(TransliterationMode::English);
    assert_eq!(feed_str(&mut e, "Hi there!"), "Hi there!".chars().map(String::from).collect::<Vec<_>>());
    assert_eq!(e.feed(InputUnit::Char('\n')), Feed::Ignored);
    assert_eq!(e.feed(InputUnit::Char('é')), Feed::Ignored);
    assert!(e.layout().is_none());
}

#[test]
fn test_committed_inputs_in_order() {
    let mut e = engine(TransliterationMode::Inscript);
    feed_keys(
        &mut e,
        &[("k", false), ("f", false), ("l", false), ("c", false), ("e", false)],
    );
    e.flush();
    let seqs: Vec<u64> = e
        .committed()
        .iter()
        .flat_map(|u| u.inputs.iter().map(|r| r.seq))
        .collect();
    assert_eq!(seqs, vec![0, 1, 2, 3, 4]);
    assert_eq!(e.committed_text(), "कितमा");
}
