pub const BANNER: &str = "HealthBot. Describe how you feel, or ask about a condition. Type /help for commands.";

pub const HELP: &str = "\
Commands:
/history   show this conversation
/tips      general health tips
/about     what this bot is (and is not)
/signin    mark the session as signed in
/signout   mark the session as signed out
/stats     reply counts for this session
/quit      leave";

pub const HEALTH_TIPS: &str = "\
Here are some general health tips to help you stay healthy and active:
- Stay Hydrated: Drink plenty of water throughout the day to keep your body hydrated and support various bodily functions.
- Exercise Regularly: Aim for at least 30 minutes of moderate exercise, like brisk walking or cycling, most days of the week to maintain cardiovascular health.
- Eat a Balanced Diet: Include a variety of fruits, vegetables, lean proteins, and whole grains in your diet to ensure you get essential nutrients.
- Get Adequate Sleep: Aim for 7-9 hours of quality sleep each night to support mental and physical health.
- Manage Stress: Practice relaxation techniques such as deep breathing, meditation, or yoga to manage stress effectively.
- Maintain Good Hygiene: Wash your hands regularly, and practice good oral hygiene to prevent infections.
- Regular Health Check-ups: Schedule regular check-ups with your healthcare provider to monitor and maintain your health.";

pub const ABOUT: &str = "\
This HealthBot is designed to provide general health information and advice. \
Remember, it's not a substitute for professional medical advice. \
Always consult with a qualified healthcare provider for personalized medical guidance.";

pub const FAREWELL: &str = "Take care!";
