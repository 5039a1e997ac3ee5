use rand::seq::SliceRandom;

pub const TIPS: [&str; 8] = [
    "When answering behavioral questions, use the STAR method: Situation, Task, Action, Result.",
    "Research the company before your interview to understand their values and culture.",
    "Prepare 3-5 questions to ask your interviewer at the end of the interview.",
    "Practice your answers out loud to improve delivery and confidence.",
    "Focus on specific achievements and quantify results when possible.",
    "Be prepared to discuss your strengths and weaknesses with concrete examples.",
    "Research common interview questions for your specific industry and role.",
    "Maintain good eye contact and positive body language during interviews.",
];

pub fn random_tip() -> &'static str {
    TIPS.choose(&mut rand::thread_rng()).copied().unwrap_or(TIPS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_tip_is_from_the_list() {
        for _ in 0..32 {
            assert!(TIPS.contains(&random_tip()));
        }
    }
}
