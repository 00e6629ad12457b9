use std::collections::VecDeque;
use std::sync::Arc;

use crate::models::{ChoiceSet, Question};

/// Ordered, read-only question data. Order is play order.
///
/// Cloning the bank shares the questions; nothing ever mutates them.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Arc<[Arc<Question>]>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: questions.into_iter().map(Arc::new).collect(),
        }
    }

    /// A fresh play queue over the bank, front first.
    pub fn load(&self) -> VecDeque<Arc<Question>> {
        self.questions.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().map(|q| &**q)
    }

    /// The built-in classic rock trivia set.
    pub fn classic_rock() -> Self {
        let questions = CLASSIC_ROCK
            .iter()
            .map(|entry| {
                Question::text(
                    entry.prompt,
                    entry.explanation,
                    ChoiceSet::four(entry.choices, entry.correct),
                )
            })
            .collect();
        Self::new(questions)
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::classic_rock()
    }
}

struct Entry {
    prompt: &'static str,
    explanation: &'static str,
    choices: [&'static str; 4],
    correct: usize,
}

const CLASSIC_ROCK: [Entry; 10] = [
    Entry {
        prompt: "Like the general population most guitarists are right-handed but there have been many famous left-handed guitarists. Which of the following guitarists is not left-handed?",
        explanation: "Jimmy Page, founding member of Led Zeppelin, member of several other successful bands and sought after session musician plays guitar right-handed.",
        choices: ["Jimi Hendrix", "Jimmy Page", "Tony Iommi", "Paul McCartney"],
        correct: 1,
    },
    Entry {
        prompt: "Renowned vocalist Graham Nash was a founding member of what group before joining Crosby, Stills and Nash?",
        explanation: "Graham Nash was a member of the popular English group The Hollies before joining David Crosby and Steven Stills in forming Crosby, Stills and Nash.",
        choices: ["The Hollies", "The Zombies", "The Small Faces", "Manfred Mann"],
        correct: 0,
    },
    Entry {
        prompt: "The Rock and Roll lifestyle has been a factor in many young and famous musician's deaths. Several well known musicians of the era all died at the same age. Jim Morrison, Janis Joplin, Brian Jones and Jimi Hendrix all died at what age?",
        explanation: "Although they all died at different times, Jim Morrison, Janis Joplin, Brian Jones and Jimi Hendrix all died at the age of 27.",
        choices: ["22", "25", "27", "30"],
        correct: 2,
    },
    Entry {
        prompt: "Many well known musicians performed in The Who's 1975 movie of their rock opera 'Tommy'. Which of the following musicians did not perform in that movie?",
        explanation: "While David Bowie appeared in quite a few movies over his lifetime, he did not appear in this one.",
        choices: ["Elton John", "David Bowie", "Tina Turner", "Eric Clapton"],
        correct: 1,
    },
    Entry {
        prompt: "While the British kicked off the Classic Rock Era, due to its size, the United States ended up producing a greater number of well known bands. Which of the following bands is a British band?",
        explanation: "Yes, as strange as it may seem, the Nashville Teens were a British band.",
        choices: [
            "Nashville Teens",
            "The Blues Magoos",
            "The Electric Prunes",
            "Gary Lewis and The Playboys",
        ],
        correct: 0,
    },
    Entry {
        prompt: "The Yardbirds were a well known and influential group of the early Classic Rock Era. Many guitarists who went on to later fame started out with stints in the band. Which of the following guitarists was never a member of The Yardbirds?",
        explanation: "While certainly a guitarist of sustained fame, Keith Richard has spent almost his entire musical career with The Rolling Stones and was never a member of The Yardbirds.",
        choices: ["Eric Clapton", "Jeff Beck", "Jimmy Page", "Keith Richard"],
        correct: 3,
    },
    Entry {
        prompt: "What well known American band did keyboard player and vocalist Greg Rolie play with before becoming a founding member of Journey?",
        explanation: "Greg Rolie was a member of Santana when they played at the original Woodstock Festival. He was their lead vocalist for their first albums.",
        choices: [
            "The Young Rascals",
            "Santana",
            "Sly and the Family Stone",
            "The Doors",
        ],
        correct: 1,
    },
    Entry {
        prompt: "Although most famous rock bands of the era wrote their own songs, it was not a requirement for success. How many songs did Mick Jagger and Keith Richard compose for The Rolling Stones debut album?",
        explanation: "Although Mick Jagger and Keith Richard have written many successful songs over their career, there was only one of their compositions on The Rolling Stones debut album.",
        choices: ["One", "Two", "Four", "Six"],
        correct: 0,
    },
    Entry {
        prompt: "Vocalist Paul Rodgers has been a member of many successful bands over his career. Which of the following bands was he never a member of?",
        explanation: "While Foghat played a similar style of music to several of the bands which Paul Rodgers has sung with, he was never a member of that band.",
        choices: ["Free", "Foghat", "The Firm", "Bad Company"],
        correct: 1,
    },
    Entry {
        prompt: "The 1967 Monterey Pop Festival was a seminal event of the early Classic Rock Era, with many bands who played there later entering the top echelon of rock acts. Which of the following well known bands did not play there?",
        explanation: "While they were successful and had several hits during their career, Procol Harum did not play at the Monterey Pop Festival in 1967.",
        choices: [
            "Buffalo Springfield",
            "Procol Harum",
            "Steve Miller Band",
            "Big Brother and the Holding Company",
        ],
        correct: 1,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_rock_correct_indices_in_bounds() {
        for entry in CLASSIC_ROCK.iter() {
            assert!(entry.correct < entry.choices.len(), "{}", entry.prompt);
        }
        let bank = QuestionBank::classic_rock();
        for question in bank.questions() {
            let choices = question.choices();
            assert!(!choices.is_empty());
            assert!(choices.correct_index() < choices.len());
        }
    }

    #[test]
    fn test_classic_rock_order_is_stable() {
        let bank = QuestionBank::classic_rock();
        assert_eq!(bank.len(), 10);

        let answers: Vec<&str> = bank.questions().map(|q| q.choices().correct_label()).collect();
        assert_eq!(answers[0], "Jimmy Page");
        assert_eq!(answers[2], "27");
        assert_eq!(answers[9], "Procol Harum");
    }

    #[test]
    fn test_load_returns_independent_queues() {
        let bank = QuestionBank::classic_rock();
        let mut first = bank.load();
        first.pop_front();
        let second = bank.load();
        assert_eq!(first.len(), 9);
        assert_eq!(second.len(), 10);
        assert!(Arc::ptr_eq(&first[0], &second[1]));
    }
}
