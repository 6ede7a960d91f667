//! Word valences for the bundled sentiment scorer.
//!
//! Mean human ratings on a -4..4 scale, covering everyday affect vocabulary
//! with an emphasis on distress, mood and wellbeing words.

/// Word valences on a -4..4 scale.
pub const VALENCE_LEXICON: &[(&str, f64)] = &[
    // positive
    ("accept", 1.6), ("accepted", 1.1), ("accomplish", 1.8), ("accomplished", 1.9), ("achieve", 1.7), ("achieved", 1.9),
    ("admire", 2.1), ("adorable", 2.2), ("adore", 2.6), ("affection", 2.4), ("agree", 1.5), ("alive", 1.6),
    ("amazed", 2.2), ("amazing", 2.8), ("amused", 1.6), ("appreciate", 1.7), ("appreciated", 2.3), ("awesome", 3.1),
    ("beautiful", 2.9), ("beloved", 2.3), ("best", 3.2), ("better", 1.9), ("bless", 1.8), ("blessed", 2.9),
    ("bliss", 2.7), ("brave", 2.4), ("bright", 1.9), ("brilliant", 2.8), ("calm", 1.3), ("calmer", 1.5),
    ("care", 2.2), ("cared", 1.8), ("caring", 2.2), ("celebrate", 2.7), ("celebrated", 2.7), ("charming", 2.8),
    ("cheer", 2.3), ("cheerful", 2.5), ("cherish", 1.6), ("comfort", 1.5), ("comfortable", 1.5), ("comforted", 1.5),
    ("confident", 2.2), ("content", 1.5), ("cool", 1.3), ("courage", 2.2), ("courageous", 2.4), ("cute", 2.0),
    ("delight", 2.9), ("delighted", 2.9), ("eager", 1.5), ("ease", 1.5), ("easy", 1.9), ("ecstatic", 2.3),
    ("encouraged", 1.5), ("encouraging", 2.4), ("energetic", 1.9), ("energized", 2.3), ("enjoy", 2.2), ("enjoyed", 2.3),
    ("enjoying", 2.4), ("enthusiastic", 1.9), ("excellent", 2.7), ("excited", 1.4), ("exciting", 2.2), ("fabulous", 2.4),
    ("fantastic", 2.6), ("fine", 0.8), ("free", 2.3), ("freedom", 3.2), ("fresh", 1.3), ("friend", 2.2),
    ("friendly", 2.2), ("friends", 2.1), ("fun", 2.3), ("funny", 1.9), ("generous", 2.3), ("gentle", 1.9),
    ("gift", 1.9), ("glad", 2.0), ("good", 1.9), ("gorgeous", 3.0), ("grateful", 2.0), ("gratitude", 2.3),
    ("great", 3.1), ("greatest", 3.2), ("happier", 2.4), ("happiest", 3.2), ("happily", 2.6), ("happiness", 2.6),
    ("happy", 2.7), ("healed", 1.4), ("healing", 1.4), ("healthy", 1.7), ("heartwarming", 2.1), ("help", 1.7),
    ("helped", 1.6), ("helpful", 1.8), ("helping", 1.2), ("hero", 2.6), ("holiday", 1.7), ("hope", 1.9),
    ("hopeful", 2.3), ("hopefully", 1.7), ("hug", 2.1), ("hugs", 2.2), ("improve", 1.9), ("improved", 2.1),
    ("improving", 1.8), ("incredible", 2.1), ("inspired", 2.2), ("inspiring", 1.9), ("interesting", 1.7), ("joke", 1.2),
    ("joy", 2.8), ("joyful", 2.9), ("kindness", 2.0), ("laugh", 2.6), ("laughed", 2.0), ("laughing", 2.2),
    ("lively", 1.9), ("love", 3.2), ("loved", 2.9), ("lovely", 2.8), ("loving", 2.9), ("lucky", 1.8),
    ("magnificent", 2.4), ("marvelous", 2.9), ("meaningful", 1.3), ("motivated", 1.8), ("nice", 1.8), ("ok", 1.2),
    ("okay", 0.9), ("optimism", 2.5), ("optimistic", 2.4), ("outstanding", 3.0), ("paradise", 3.2), ("party", 1.7),
    ("passion", 2.0), ("peace", 2.5), ("peaceful", 2.2), ("perfect", 2.7), ("playful", 1.9), ("pleasant", 2.3),
    ("pleased", 1.9), ("pleasure", 2.7), ("positive", 2.6), ("productive", 2.0), ("progress", 1.8), ("proud", 2.1),
    ("recovered", 1.6), ("recovering", 1.0), ("refreshed", 1.7), ("relax", 1.9), ("relaxed", 2.2), ("relaxing", 2.2),
    ("relief", 2.1), ("relieved", 1.6), ("rested", 1.4), ("reward", 2.3), ("rewarding", 2.4), ("romantic", 2.3),
    ("safe", 1.9), ("satisfied", 1.8), ("secure", 1.4), ("smile", 1.5), ("smiled", 2.5), ("smiling", 2.4),
    ("solved", 1.1), ("special", 1.7), ("splendid", 2.8), ("strength", 2.2), ("strong", 2.3), ("stronger", 1.6),
    ("succeed", 2.2), ("succeeded", 1.8), ("success", 2.7), ("successful", 2.8), ("sunshine", 2.2), ("super", 2.9),
    ("support", 1.7), ("supported", 1.3), ("supportive", 1.2), ("sure", 1.3), ("surprise", 1.1), ("sweet", 2.0),
    ("terrific", 3.2), ("thank", 1.5), ("thankful", 2.7), ("thanks", 1.9), ("thrilled", 1.9), ("treasure", 1.2),
    ("trust", 2.3), ("trusted", 2.1), ("understood", 1.3), ("upbeat", 1.4), ("valuable", 2.1), ("valued", 1.9),
    ("warm", 0.9), ("warmth", 2.0), ("welcome", 2.0), ("well", 1.1), ("win", 2.8), ("winner", 2.8),
    ("winning", 2.4), ("wise", 1.8), ("won", 2.7), ("wonderful", 2.7), ("worth", 0.9), ("worthy", 1.9),
    ("wow", 2.8), ("yay", 2.4), ("yes", 1.7),
    // negative
    ("abandon", -1.9), ("abandoned", -2.0), ("abuse", -3.2), ("abused", -2.3), ("ache", -1.6), ("aching", -2.2),
    ("afraid", -2.0), ("aggressive", -0.6), ("agony", -1.8), ("alarmed", -1.4), ("alone", -1.0), ("anger", -2.7),
    ("angry", -2.3), ("anguish", -2.9), ("annoyed", -1.6), ("annoying", -1.8), ("anxiety", -0.7), ("anxious", -1.0),
    ("apathetic", -1.2), ("argue", -1.4), ("arguing", -2.0), ("argument", -1.5), ("ashamed", -2.1), ("attack", -2.1),
    ("avoid", -1.2), ("awful", -2.0), ("awkward", -0.6), ("bad", -2.5), ("betrayed", -3.0), ("bitter", -1.8),
    ("blame", -1.4), ("blamed", -2.1), ("bored", -1.1), ("boring", -1.3), ("broke", -1.8), ("broken", -2.1),
    ("bullied", -3.1), ("bully", -2.8), ("burden", -1.9), ("burdened", -1.5), ("burned", -1.2), ("burnout", -2.2),
    ("cheated", -2.6), ("collapse", -2.2), ("confused", -1.3), ("crash", -1.7), ("crazy", -1.4), ("cried", -1.6),
    ("cries", -1.7), ("crisis", -3.1), ("critical", -0.6), ("cruel", -2.8), ("crushed", -1.8), ("cry", -2.1),
    ("crying", -2.1), ("damaged", -2.2), ("danger", -2.4), ("dark", -1.4), ("dead", -3.3), ("death", -2.9),
    ("defeated", -2.1), ("dejected", -2.2), ("depressed", -2.3), ("depressing", -1.6), ("depression", -1.9), ("despair", -3.0),
    ("desperate", -1.3), ("destroyed", -3.4), ("devastated", -3.1), ("devastating", -3.3), ("die", -2.9), ("died", -2.6),
    ("disappointed", -1.9), ("disappointing", -2.2), ("disappointment", -2.3), ("disaster", -3.1), ("disgusted", -2.4), ("disgusting", -2.4),
    ("dislike", -1.6), ("distress", -2.4), ("distressed", -1.8), ("doom", -1.7), ("doomed", -3.2), ("down", -0.9),
    ("drained", -1.5), ("dread", -2.0), ("dreadful", -1.9), ("dumb", -2.3), ("dying", -2.9), ("embarrassed", -1.5),
    ("empty", -0.8), ("enraged", -1.7), ("envy", -1.1), ("exhausted", -1.5), ("exhausting", -1.5), ("fail", -2.5),
    ("failed", -2.3), ("failing", -2.3), ("failure", -2.3), ("fake", -2.1), ("fatigue", -1.0), ("fear", -2.2),
    ("fearful", -2.2), ("fight", -1.6), ("fighting", -1.9), ("forgotten", -0.9), ("fragile", -1.1), ("frightened", -1.9),
    ("frustrated", -2.3), ("frustrating", -1.9), ("frustration", -2.1), ("furious", -2.8), ("gloomy", -0.6), ("grief", -2.2),
    ("grieving", -1.6), ("guilt", -1.1), ("guilty", -1.8), ("harassed", -2.5), ("hard", -0.4), ("harm", -2.5),
    ("hate", -2.7), ("hated", -3.2), ("hateful", -2.2), ("hates", -1.9), ("hating", -2.3), ("heartbreak", -2.7),
    ("heartbroken", -3.3), ("heavy", -0.8), ("hell", -3.6), ("helpless", -2.0), ("hopeless", -2.0), ("hopelessness", -3.1),
    ("horrible", -2.5), ("hostile", -2.2), ("humiliated", -2.8), ("hurt", -2.4), ("hurting", -2.1), ("hurts", -2.1),
    ("ignored", -1.3), ("ill", -1.8), ("injured", -1.7), ("insecure", -1.8), ("insomnia", -1.3), ("irritated", -2.0),
    ("isolated", -1.3), ("jealous", -2.0), ("kill", -3.7), ("killing", -3.4), ("lonelier", -1.4), ("loneliness", -1.8),
    ("lonely", -1.5), ("lose", -1.3), ("loser", -2.4), ("losing", -1.6), ("loss", -1.3), ("lost", -1.3),
    ("mad", -2.2), ("mess", -1.5), ("miserable", -2.2), ("misery", -2.7), ("miss", -0.6), ("missed", -1.2),
    ("mistake", -1.4), ("mourning", -1.9), ("nasty", -2.6), ("nervous", -1.1), ("nightmare", -1.9), ("numb", -1.4),
    ("overwhelmed", -1.5), ("overwhelming", -1.1), ("pain", -2.3), ("painful", -1.9), ("panic", -2.5), ("panicked", -2.0),
    ("paranoid", -1.0), ("pathetic", -2.7), ("pointless", -1.7), ("poor", -2.1), ("pressure", -1.2), ("rage", -2.6),
    ("regret", -1.8), ("regretful", -1.9), ("rejected", -1.8), ("rejection", -2.5), ("resent", -0.7), ("restless", -1.1),
    ("ruined", -2.4), ("sad", -2.1), ("sadness", -1.9), ("scared", -1.9), ("scary", -2.2), ("screwed", -1.5),
    ("shaking", -0.7), ("shame", -2.1), ("shattered", -2.1), ("shock", -1.6), ("shocked", -1.3), ("sick", -2.3),
    ("sobbing", -2.5), ("sorrow", -2.4), ("sorry", -0.3), ("stress", -1.8), ("stressed", -1.4), ("stressful", -2.0),
    ("struggle", -1.3), ("struggling", -1.5), ("stuck", -1.0), ("stupid", -2.4), ("suffer", -2.5), ("suffering", -2.1),
    ("suicidal", -3.6), ("suicide", -3.5), ("tense", -1.4), ("terrible", -2.1), ("terrified", -3.0), ("terror", -2.9),
    ("threat", -2.4), ("tired", -1.9), ("torn", -1.0), ("tragedy", -3.4), ("tragic", -3.4), ("trapped", -2.4),
    ("trauma", -1.8), ("traumatic", -2.7), ("trouble", -1.7), ("ugly", -2.3), ("unbearable", -2.3), ("uncomfortable", -1.6),
    ("unhappy", -1.8), ("unloved", -2.6), ("unsafe", -1.6), ("unwanted", -0.9), ("upset", -1.6), ("useless", -1.8),
    ("victim", -1.1), ("violence", -3.1), ("vulnerable", -0.9), ("weak", -1.9), ("weary", -1.1), ("weep", -2.7),
    ("weeping", -1.9), ("wept", -2.0), ("worn", -1.2), ("worried", -1.2), ("worries", -1.2), ("worry", -1.9),
    ("worrying", -1.4), ("worse", -2.1), ("worst", -3.1), ("worthless", -1.9), ("wounded", -2.1), ("wreck", -1.4),
    ("wrong", -2.1),
];
