// File: src/quiz.rs
//! Multiple-choice quiz for the greenhouse effect module.

use crate::error::{EcoPalError, Result};

/// Minimum score, in percent, that passes the module.
pub const PASSING_SCORE: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy)]
pub struct QuizOption {
    pub text: &'static str,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: &'static [QuizOption],
    pub explanation: &'static str,
    pub difficulty: Difficulty,
}

impl QuizQuestion {
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.correct)
    }
}

const fn opt(text: &'static str, correct: bool) -> QuizOption {
    QuizOption { text, correct }
}

pub const GREENHOUSE_QUIZ: &[QuizQuestion] = &[
    QuizQuestion {
        id: 1,
        question: "What would Earth's average temperature be without the natural greenhouse effect?",
        options: &[
            opt("About 15°C (59°F)", false),
            opt("About -18°C (0°F)", true),
            opt("About 30°C (86°F)", false),
            opt("About 0°C (32°F)", false),
        ],
        explanation: "Without greenhouse gases trapping heat, Earth would be a frozen world at -18°C, 33°C colder than today!",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 2,
        question: "Which greenhouse gas is responsible for the largest share of human-caused emissions?",
        options: &[
            opt("Methane (CH₄)", false),
            opt("Nitrous Oxide (N₂O)", false),
            opt("Carbon Dioxide (CO₂)", true),
            opt("Water Vapor (H₂O)", false),
        ],
        explanation: "CO₂ accounts for about 76% of human-caused greenhouse gas emissions, primarily from burning fossil fuels.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 3,
        question: "How much have CO₂ levels increased since pre-industrial times?",
        options: &[
            opt("About 10%", false),
            opt("About 25%", false),
            opt("About 50%", true),
            opt("About 100%", false),
        ],
        explanation: "CO₂ has risen from 280 ppm to 421 ppm, a 50% increase and the highest level in 3 million years.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 4,
        question: "Which sector produces the most greenhouse gas emissions globally?",
        options: &[
            opt("Transportation", false),
            opt("Electricity & Heat Production", true),
            opt("Agriculture", false),
            opt("Buildings", false),
        ],
        explanation: "Electricity and heat production accounts for 25% of global emissions, mainly from burning coal and natural gas.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 5,
        question: "By how much do emissions need to fall by 2030 to limit warming to 1.5°C?",
        options: &[opt("10%", false), opt("25%", false), opt("45%", true), opt("70%", false)],
        explanation: "Scientists say we need to cut emissions by 45% by 2030 and reach net-zero by 2050 to stay within 1.5°C.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 6,
        question: "How much more potent is methane than CO₂ over a 20-year period?",
        options: &[
            opt("10 times", false),
            opt("30 times", false),
            opt("80 times", true),
            opt("300 times", false),
        ],
        explanation: "Methane is approximately 80 times more potent than CO₂ at trapping heat over a 20-year period, though it breaks down faster.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 7,
        question: "What percentage of Earth's incoming solar radiation is reflected back to space?",
        options: &[opt("10%", false), opt("30%", true), opt("50%", false), opt("70%", false)],
        explanation: "About 30% of incoming solar radiation is reflected back to space by clouds, ice, snow, and other reflective surfaces. This is Earth's albedo.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 8,
        question: "Which of these is a climate tipping point that scientists are most concerned about?",
        options: &[
            opt("Increased bird migration", false),
            opt("Amazon rainforest dieback", true),
            opt("More frequent rainbows", false),
            opt("Shifting trade winds", false),
        ],
        explanation: "The Amazon rainforest is approaching a tipping point (~17% already deforested) where it could turn from a carbon sink into a carbon source.",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        id: 9,
        question: "How much has the cost of solar power dropped since 2010?",
        options: &[
            opt("About 30%", false),
            opt("About 55%", false),
            opt("About 89%", true),
            opt("About 95%", false),
        ],
        explanation: "Solar power costs have plummeted by 89% since 2010, making it one of the cheapest sources of electricity in history.",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 10,
        question: "At current emission rates, approximately when could the 1.5°C carbon budget be exhausted?",
        options: &[
            opt("By 2025", false),
            opt("By 2030", true),
            opt("By 2050", false),
            opt("By 2100", false),
        ],
        explanation: "At ~40 Gt CO₂/year and ~250 Gt remaining budget (67% chance), the 1.5°C carbon budget could be used up around 2030.",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        id: 11,
        question: "What is the 'albedo effect'?",
        options: &[
            opt("The warming caused by greenhouse gases", false),
            opt("The reflection of solar radiation by Earth's surfaces", true),
            opt("The absorption of heat by oceans", false),
            opt("The release of methane from permafrost", false),
        ],
        explanation: "Albedo refers to how much solar radiation is reflected by surfaces. Ice and snow have high albedo (reflect more), while dark surfaces like oceans have low albedo (absorb more).",
        difficulty: Difficulty::Medium,
    },
    QuizQuestion {
        id: 12,
        question: "How many people could be displaced by climate change by 2050?",
        options: &[
            opt("50 million", false),
            opt("100 million", false),
            opt("216 million", true),
            opt("500 million", false),
        ],
        explanation: "The World Bank projects 216 million climate migrants by 2050 due to sea level rise, water scarcity, crop failure, and extreme weather.",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        id: 13,
        question: "Which natural ecosystem stores the most carbon per unit area?",
        options: &[
            opt("Tropical rainforests", false),
            opt("Mangrove forests", true),
            opt("Grasslands", false),
            opt("Boreal forests", false),
        ],
        explanation: "Mangroves store 3-5 times more carbon per unit area than land forests, making them incredibly important carbon sinks to protect.",
        difficulty: Difficulty::Hard,
    },
    QuizQuestion {
        id: 14,
        question: "What is Earth's current average surface temperature?",
        options: &[
            opt("About 10°C (50°F)", false),
            opt("About 15°C (59°F)", true),
            opt("About 20°C (68°F)", false),
            opt("About 25°C (77°F)", false),
        ],
        explanation: "Earth's average surface temperature is about 15°C (59°F), maintained by the natural greenhouse effect. Without it, Earth would be -18°C.",
        difficulty: Difficulty::Easy,
    },
    QuizQuestion {
        id: 15,
        question: "What percentage of excess heat has been absorbed by the oceans?",
        options: &[opt("50%", false), opt("70%", false), opt("90%", true), opt("30%", false)],
        explanation: "Oceans have absorbed about 90% of the excess heat from global warming, acting as a massive heat buffer. The cost is ocean warming and acidification.",
        difficulty: Difficulty::Medium,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_index: Option<usize>,
    pub explanation: &'static str,
}

/// Walks through a question set one answer at a time.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: &'static [QuizQuestion],
    current: usize,
    correct_answers: usize,
}

impl QuizSession {
    pub fn new(questions: &'static [QuizQuestion]) -> Self {
        Self {
            questions,
            current: 0,
            correct_answers: 0,
        }
    }

    pub fn greenhouse() -> Self {
        Self::new(GREENHOUSE_QUIZ)
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        self.questions.get(self.current)
    }

    /// Zero-based position of the current question.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    pub fn correct_answers(&self) -> usize {
        self.correct_answers
    }

    /// Answers the current question and moves on to the next one.
    pub fn answer(&mut self, option: usize) -> Result<AnswerFeedback> {
        let question = self.current_question().ok_or(EcoPalError::QuizFinished)?;
        let chosen = question.options.get(option).ok_or(EcoPalError::InvalidOption {
            index: option,
            available: question.options.len(),
        })?;
        if chosen.correct {
            self.correct_answers += 1;
        }
        self.current += 1;
        Ok(AnswerFeedback {
            correct: chosen.correct,
            correct_index: question.correct_index(),
            explanation: question.explanation,
        })
    }

    /// Percentage of all questions answered correctly, rounded.
    pub fn score_percent(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }
        ((self.correct_answers as f64 / self.questions.len() as f64) * 100.0).round() as u32
    }

    pub fn passed(&self) -> bool {
        self.score_percent() >= PASSING_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(session: &mut QuizSession, correct_count: usize) {
        let mut given = 0;
        while let Some(q) = session.current_question() {
            let right = q.correct_index().unwrap();
            let pick = if given < correct_count { right } else { (right + 1) % q.options.len() };
            session.answer(pick).unwrap();
            given += 1;
        }
    }

    #[test]
    fn test_every_question_has_exactly_one_correct_option() {
        for q in GREENHOUSE_QUIZ {
            assert_eq!(q.options.iter().filter(|o| o.correct).count(), 1, "question {}", q.id);
        }
    }

    #[test]
    fn test_perfect_score_passes() {
        let mut session = QuizSession::greenhouse();
        let total = session.len();
        answer_all(&mut session, total);
        assert!(session.is_finished());
        assert_eq!(session.score_percent(), 100);
        assert!(session.passed());
    }

    #[test]
    fn test_pass_threshold_is_eighty_percent() {
        let mut session = QuizSession::greenhouse();
        answer_all(&mut session, 12);
        assert_eq!(session.score_percent(), 80);
        assert!(session.passed());

        let mut session = QuizSession::greenhouse();
        answer_all(&mut session, 11);
        assert_eq!(session.score_percent(), 73);
        assert!(!session.passed());
    }

    #[test]
    fn test_greenhouse_set_is_complete_and_ordered() {
        assert_eq!(GREENHOUSE_QUIZ.len(), 15);
        let ids: Vec<u32> = GREENHOUSE_QUIZ.iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<u32>>());
        assert!(GREENHOUSE_QUIZ.iter().any(|q| q.question.contains("albedo")));
        assert!(GREENHOUSE_QUIZ.iter().any(|q| q.explanation.contains("90%")));
    }

    #[test]
    fn test_feedback_reports_explanation() {
        let mut session = QuizSession::greenhouse();
        let feedback = session.answer(0).unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.correct_index, Some(1));
        assert!(feedback.explanation.contains("-18°C"));
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn test_invalid_option_does_not_advance() {
        let mut session = QuizSession::greenhouse();
        assert!(matches!(
            session.answer(9),
            Err(EcoPalError::InvalidOption { index: 9, available: 4 })
        ));
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_answer_after_finish_errors() {
        let mut session = QuizSession::greenhouse();
        answer_all(&mut session, 0);
        assert!(matches!(session.answer(0), Err(EcoPalError::QuizFinished)));
        assert_eq!(session.score_percent(), 0);
    }
}
