// All LLM prompt constants for the bullet module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Instructions for the writing call. Prefix with CAREER_COACH_PERSONA.
pub const WRITING_INSTRUCTIONS: &str = "\
    You will be given a request to write a resume bullet point with information the user thinks is important. \
    You will then write 10 variations of the bullet point. \
    Respond with a JSON object whose `list_of_bullets` field holds the variations.";

/// Writing prompt template.
/// Replace: {accomplished}, {measured}, {task}, {keyword_line}
pub const WRITING_PROMPT_TEMPLATE: &str = r#"You will help write resume bullet points based on the following information:

Accomplishment [X]: {accomplished}
Measurement [Y]: {measured}
Task/Project [Z]: {task}
{keyword_line}

Write 10 different variations of a bullet point incorporating this information.
Each bullet point should be clear, concise, and highlight the impact.

## Rules

### Formatting
- The bullet point should follow the general format:
    - Accomplished [X], as measured by [Y], by doing [Z]
    - You do not need to follow the format exactly, but mention X, Y, and Z in that order.
    - Phrase the measurement and the task however it naturally flows.
- Lead with a strong action verb.
- Be specific and to the point.
- The bullet point should be about a skill the user has.
- Only use punctuation available on a standard QWERTY keyboard.
    - Never use an em dash; use a comma, colon, semicolon, or parentheses instead.
- A recruiter should be able to understand the bullet point in less than a second.
- Do not include line breaks; the resume will wrap the bullet point.

### Content
- Write in the past tense and active voice, without pronouns.
- Make the variations meaningfully different from each other.
- Drop information that is not relevant to make the bullet more concise.
- Vary the lengths, keeping mostly to two lines or less. One three line bullet is acceptable if the extra detail helps.
    - A one line bullet point is under ~100 characters
    - A two line bullet point is under ~200 characters
    - A three line bullet point is under ~250 characters
    - At least half of the bullet points MUST be one line.
    - Make one bullet as short as possible (under 70 characters is good) while staying effective.
- If a number is provided, use it when it is relevant and makes sense; skip it if it is absurd.
- If a keyword is provided, incorporate it unless it is not relevant to the bullet point.

### Meta
- Your bullet points will be graded on a number of criteria.
- Carefully consider each variation before writing it.

## Example
**INPUT**
- X: Increased revenue for a number of business clients (maybe 15)
- Y: by 10% Quarter over Quarter
- Z: Mapped new software features as solutions to their business problems

**OUTPUT**
- Grew revenue for 15 small and medium business clients by 10% QoQ by mapping new software features as solutions to their business goals."#;

/// Instructions for the grading call. Prefix with CAREER_COACH_PERSONA.
pub const GRADING_INSTRUCTIONS: &str = "\
    You will be given a list of numbered bullet points and a request to grade them. \
    You will grade each bullet point on a number of criteria \
    by answering a series of questions with true or false. \
    Respond with a JSON object whose `ratings` field holds one rating per bullet point.";

/// Grading prompt template.
/// Replace: {numbered_bullets}, {keyword_line}
pub const GRADING_PROMPT_TEMPLATE: &str = r#"## Input
- Bullet Points:
{numbered_bullets}
- {keyword_line}

## Grading Criteria
- strong_action_verb: Does the bullet point lead with a strong action verb? If the action verb does not make sense, it is not a strong action verb.
- clear_meaning: Does the bullet point have a clear meaning?
- has_quantifiable_result: Does the bullet point have a quantifiable result? If there is no quantification, it is not quantifiable.
- result_makes_sense: Does the result make sense? If the result seems out of proportion to the accomplishment, it does not make sense.
- skill_can_be_deduced: Can the skill be deduced from the bullet point?
- skill_is_valuable: Is the deduced skill valuable to a potential employer? If the skill cannot be deduced, it is not valuable.
- is_readable: Is the bullet point digestible at a quick glance? Could a recruiter understand it in less than a second?
- is_specific: Is the bullet point specific about what it describes? If anything feels ambiguous, it is not specific.
- keyword_added: Is the keyword part of the bullet point? If no keyword was provided, answer false.

## Rules
- Provide exactly one rating for each bullet point.
- Set `bullet_id` to the number shown before the bullet point you are grading.
- Grade each bullet point individually, not as a whole."#;
