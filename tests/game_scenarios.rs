use std::collections::BTreeSet;
use wordle_engine::core::{Dictionary, Word};
use wordle_engine::game::{Game, GameError, GameState};

fn word(raw: &str) -> Word {
    Word::new(raw).unwrap()
}

fn positions(list: &[usize]) -> BTreeSet<usize> {
    list.iter().copied().collect()
}

#[test]
fn test_full_round_against_tibia() {
    let secret = word("tibia");
    let words: Vec<Word> = ["paper", "tools", "music", "think", "twins", "tight"]
        .into_iter()
        .map(word)
        .chain(std::iter::once(secret.clone()))
        .collect();
    let mut game = Game::new(Dictionary::new(words), secret.clone()).unwrap();

    assert!(!game.has_won());
    assert!(!game.has_lost());

    // (position, misplaced) expected for each attempt against TIBIA
    let expected: [(&str, &[usize], &[usize]); 6] = [
        ("paper", &[], &[2]),
        ("tools", &[1], &[]),
        ("music", &[4], &[]),
        ("think", &[1], &[3]),
        ("twins", &[1], &[3]),
        ("tight", &[1, 2], &[]),
    ];

    for (raw, exact, misplaced) in expected {
        let attempt = word(raw);
        assert_eq!(attempt.matches_position_with(&secret), positions(exact), "{raw}");
        assert_eq!(
            attempt.matches_incorrect_position_with(&secret),
            positions(misplaced),
            "{raw}"
        );
        game.add_attempt(attempt).unwrap();
    }

    assert!(!game.has_won());
    assert!(game.has_lost());
    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(game.words_attempted().len(), 6);
}

#[test]
fn test_attempts_keep_submission_order() {
    let mut game = Game::new(
        Dictionary::from_strs(&["loser", "music", "paper"]).unwrap(),
        word("music"),
    )
    .unwrap();

    game.add_attempt(word("paper")).unwrap();
    game.add_attempt(word("loser")).unwrap();
    game.add_attempt(word("paper")).unwrap();

    let texts: Vec<&str> = game.words_attempted().iter().map(Word::text).collect();
    assert_eq!(texts, vec!["paper", "loser", "paper"]);
}

#[test]
fn test_rejected_attempt_does_not_change_round() {
    let mut game = Game::new(
        Dictionary::from_strs(&["loser", "music"]).unwrap(),
        word("music"),
    )
    .unwrap();
    game.add_attempt(word("loser")).unwrap();

    assert_eq!(
        game.add_attempt(word("happy")),
        Err(GameError::WordNotInDictionary(word("happy")))
    );
    assert_eq!(game.words_attempted(), &[word("loser")]);
    assert_eq!(game.attempts_remaining(), 5);
}

#[test]
fn test_win_is_final() {
    let mut game = Game::new(
        Dictionary::from_strs(&["loser", "music"]).unwrap(),
        word("music"),
    )
    .unwrap();
    game.add_attempt(word("music")).unwrap();
    assert!(game.has_won());

    for _ in 0..6 {
        assert!(matches!(
            game.add_attempt(word("loser")),
            Err(GameError::GameAlreadyFinished(GameState::Won))
        ));
    }
    assert!(game.has_won());
    assert!(!game.has_lost());
}

#[test]
fn test_secret_must_be_in_dictionary() {
    let result = Game::new(Dictionary::from_strs(&["loser"]).unwrap(), word("music"));
    assert!(matches!(
        result,
        Err(GameError::SecretWordNotInDictionary(w)) if w.text() == "music"
    ));
}

#[test]
fn test_duplicate_letter_scenarios() {
    let cases: [(&str, &str, &[usize], &[usize]); 6] = [
        ("trees", "drama", &[2], &[]),
        ("alarm", "drama", &[3], &[1, 4, 5]),
        ("drama", "alarm", &[3], &[2, 4, 5]),
        ("geese", "those", &[4, 5], &[]),
        ("added", "dread", &[5], &[1, 2, 4]),
        ("mamma", "maxim", &[1, 2], &[3]),
    ];

    for (guess, secret, exact, misplaced) in cases {
        let guess = word(guess);
        let secret = word(secret);
        assert_eq!(guess.matches_position_with(&secret), positions(exact));
        assert_eq!(guess.matches_incorrect_position_with(&secret), positions(misplaced));
    }
}
