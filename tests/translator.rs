//! Integration tests for the public translation API

use piglatin::{translate, translate_optional, translate_request, TranslationError, TranslationRequest};

#[test]
fn test_documented_words() {
    let cases = [
        ("apple", "appleyay"),
        ("Eat", "Eatyay"),
        ("explain", "explainyay"),
        ("Smile", "Ilesmay"),
        ("Glove", "Oveglay"),
    ];

    for (input, expected) in cases {
        assert_eq!(translate(input).unwrap(), expected, "input: {}", input);
    }
}

#[test]
fn test_multi_word_phrase() {
    assert_eq!(translate("I love apples").unwrap(), "Iyay ovelay applesyay");
}

#[test]
fn test_every_separator_splits_words() {
    assert_eq!(
        translate("cat dog-pig?hen.cow,yak!").unwrap(),
        "atcay ogday-igpay?enhay.owcay,akyay!"
    );
}

#[test]
fn test_mixed_content() {
    assert_eq!(
        translate("The quick brown fox, 2 times!").unwrap(),
        "Ethay uickqay ownbray oxfay, 2 imestay!"
    );
    assert_eq!(translate("Strengths").unwrap(), "Engthsstray");
    assert_eq!(translate("My gym").unwrap(), "Myay gymay");
}

#[test]
fn test_invalid_arguments() {
    for input in ["", "   ", "\n\t "] {
        let err = translate(input).unwrap_err();
        assert!(
            matches!(err, TranslationError::InvalidArgument { .. }),
            "input {:?} gave {:?}",
            input,
            err
        );
    }

    assert!(translate_optional(None).unwrap_err().is_invalid_argument());
    assert!(translate_request(&TranslationRequest { text: None })
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn test_same_input_same_output() {
    let phrase = "Hello there, General Kenobi!";
    assert_eq!(translate(phrase).unwrap(), translate(phrase).unwrap());
}
