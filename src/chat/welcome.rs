//! Content shown while a conversation is empty.

pub const EXAMPLE_PROMPTS: [&str; 3] = [
    "Explain quantum computing in simple terms",
    "Got any creative ideas for a 10 year old's birthday?",
    "How do I make an HTTP request in Javascript?",
];

pub const CAPABILITIES: [&str; 3] = [
    "Remembers what user said earlier in the conversation",
    "Allows user to provide follow-up corrections",
    "Trained to decline inappropriate requests",
];

pub const LIMITATIONS: [&str; 3] = [
    "May occasionally generate incorrect information",
    "May occasionally produce harmful instructions or biased content",
    "Limited knowledge of world and events after 2021",
];
