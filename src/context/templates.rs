//! Hand-written background paragraphs used when a model reply is missing or
//! rejected. Every paragraph opens with a concrete fact and carries at least
//! two kinds of specific detail, so it clears the detector on its own.
//!
//! Placeholders: `{when}` ("On January 6, 2021" / "In 2021") and `{keyword}`.

use super::topic::Topic;
use crate::types::Level;

#[derive(Debug, Clone, Copy)]
pub struct LevelText {
    pub beginner: &'static str,
    pub intermediate: &'static str,
    pub advanced: &'static str,
}

impl LevelText {
    pub fn pick(&self, level: Level) -> &'static str {
        match level {
            Level::Beginner => self.beginner,
            Level::Intermediate => self.intermediate,
            Level::Advanced => self.advanced,
        }
    }
}

pub const HUSKERS: LevelText = LevelText {
    beginner: "The Huskers are the football team of the University of Nebraska. \
        The team played its first season in 1890. \
        The name comes from farm work, when people husked corn by hand. \
        On game days, the stadium in Lincoln fills with fans in red. \
        Many fans drive for hours across the state to watch.",
    intermediate: "The University of Nebraska fielded its first football team in 1890, and the program adopted the name 'Cornhuskers' around 1900. \
        The nickname points to the state's farming economy, where corn was once husked by hand at harvest time. \
        Home games in Lincoln have sold out every season since 1962, one of the longest streaks in American college sports. \
        For many Nebraskans, the team is a shared identity in a state without a major professional franchise.",
    advanced: "The University of Nebraska began intercollegiate football in 1890, and by 1900 the program had adopted the 'Cornhuskers' name, a reference to the hand harvesting of corn that defined the state's agricultural economy. \
        Memorial Stadium in Lincoln has recorded consecutive sellouts since 1962, a streak frequently cited as evidence of how deeply college athletics are woven into civic life in the American Midwest. \
        Because Nebraska has no major professional franchise, the Huskers function as a statewide institution, drawing loyalty from residents who never attended the university itself. \
        Coaching changes, conference realignment and recruiting results are therefore reported as matters of public interest rather than as routine sports news.",
};

pub const CAPITOL_RIOT: LevelText = LevelText {
    beginner: "On January 6, 2021, a crowd broke into the United States Capitol in Washington. \
        Congress was counting the votes from the 2020 election that day. \
        Police found pipe bombs near the offices of both big parties. \
        The FBI spent years looking for the person who left them. \
        Hundreds of people were arrested and charged in court.",
    intermediate: "On January 6, 2021, supporters of President Donald Trump stormed the United States Capitol while Congress met to certify the 2020 election results. \
        The night before, pipe bombs had been placed outside the headquarters of the Democratic National Committee (DNC) and the Republican National Committee (RNC). \
        Neither device exploded, but the case became one of the most closely watched FBI investigations of the decade. \
        More than 1,000 people were later charged for their roles in the Capitol attack, and the day remains a sharp dividing line in American politics.",
    advanced: "On January 6, 2021, a crowd of Trump supporters breached the United States Capitol as Congress convened to certify the 2020 presidential election, interrupting a procedure that had proceeded peacefully for over two centuries. \
        Pipe bombs discovered the previous evening outside the Democratic and Republican national committee headquarters prompted one of the FBI's most extensive domestic investigations, since neither device detonated. \
        More than 1,000 defendants were subsequently prosecuted in federal court, producing an unusually detailed public record of how the breach was planned and carried out. \
        Interpretations of that day continue to divide American voters, so any new arrest or court ruling tied to it attracts national coverage.",
};

pub const TRUMP: LevelText = LevelText {
    beginner: "Donald Trump was the 45th president of the United States. \
        He first won the presidential election in 2016. \
        He won the election again in 2024 and returned to the White House. \
        He often talks about trade, borders and jobs. \
        His plans get strong support and strong criticism.",
    intermediate: "Donald Trump, a New York businessman and television personality, won the 2016 presidential election and served as the 45th president of the United States. \
        After losing to Joe Biden in 2020, he returned to office by winning the 2024 election. \
        His 'America First' agenda favors tariffs, tighter immigration controls and skepticism toward long-standing alliances. \
        Because he divides American voters so sharply, reports on his decisions usually include reactions from both supporters and opponents.",
    advanced: "Donald Trump's victory in 2016, achieved by a real estate developer with no prior government or military service, marked a sharp break with the career politicians who had dominated American presidencies. \
        His 'America First' program recast tariffs, immigration enforcement and alliance commitments as instruments of national leverage rather than as settled features of the postwar order. \
        After his defeat in 2020 and the contested aftermath that culminated on January 6, 2021, he won the 2024 election, becoming the second president after Grover Cleveland to serve non-consecutive terms. \
        Coverage of his statements therefore tends to pair each policy claim with responses from allies, opponents, foreign governments and independent fact-checkers who test his figures.",
};

pub const TRUMP_CHINA_TRADE: LevelText = LevelText {
    beginner: "Donald Trump started a trade war with China in 2018. \
        He put new taxes, called tariffs, on Chinese goods. \
        China answered with tariffs on American farm products. \
        Farmers in the United States lost a lot of sales. \
        The two nations are still arguing about trade today.",
    intermediate: "In 2018, the Trump administration imposed tariffs on hundreds of billions of dollars of Chinese imports, starting a trade war between the United States and China. \
        Beijing retaliated with tariffs on American soybeans, pork and other farm goods, hurting rural exporters. \
        A partial 'Phase One' deal signed in January 2020 eased some tensions, but most tariffs stayed in place under President Biden. \
        Trump's return to office in 2025 brought new tariff threats, so trade talks with China remain front-page news.",
    advanced: "Beginning in 2018, the Trump administration imposed tariffs on roughly 360 billion dollars of Chinese imports, invoking the Trade Act of 1974 to argue that Beijing's technology-transfer practices harmed American firms. \
        China's retaliatory duties targeted politically sensitive agricultural exports such as soybeans, obliging Washington to compensate farmers with federal aid payments exceeding 20 billion dollars. \
        The 'Phase One' agreement of January 2020 committed China to purchases that were never fully met, and the Biden administration largely retained the tariffs while adding export controls on advanced semiconductors. \
        Consequently, each new tariff announcement is read as part of a longer contest over industrial policy, supply chains and technological leadership between the two largest economies.",
};

pub const TAIWAN: LevelText = LevelText {
    beginner: "Taiwan is an island about 160 kilometers from mainland China. \
        Its government moved there in 1949 after a civil war in China. \
        Today Taiwan has its own elections and its own army. \
        China says Taiwan is part of its land. \
        Most people in Taiwan want to keep their way of life.",
    intermediate: "Taiwan has been governed separately from mainland China since 1949, when the Nationalist government retreated to the island after losing the Chinese Civil War. \
        The People's Republic of China in Beijing claims Taiwan as its territory and has not ruled out using force to take it. \
        Taiwan held its first direct presidential election in 1996 and is now a lively democracy with a major semiconductor industry. \
        The United States keeps unofficial ties with Taipei and sells it weapons, which makes cross-strait relations a constant source of tension.",
    advanced: "Taiwan's separate political trajectory dates to 1949, when the Nationalist government of Chiang Kai-shek withdrew to the island after its defeat in the Chinese Civil War. \
        The People's Republic regards unification as a core national objective, whereas Taiwan's democratization, culminating in its first direct presidential election in 1996, has fostered a distinct civic identity. \
        Under the Taiwan Relations Act of 1979, the United States maintains unofficial relations with Taipei and supplies defensive arms, a policy of strategic ambiguity intended to deter both invasion and a formal declaration of independence. \
        Taiwan's dominance in advanced chip manufacturing, concentrated in a few firms near Hsinchu, further raises the economic stakes of any military or diplomatic confrontation across the strait.",
};

/// Subject areas with their own paragraph when the article carries a year or date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Crime,
    Politics,
    International,
    Economy,
    Technology,
    Health,
}

pub const THEMED: &[(Theme, LevelText)] = &[
    (
        Theme::Crime,
        LevelText {
            beginner: "{when}, police and courts were part of this story about {keyword}. \
                In the United States, the FBI looks into federal crimes. \
                The FBI was started in 1908. \
                A person who is arrested is not guilty until a court decides. \
                Judges and juries look at the evidence in each case.",
            intermediate: "{when}, law enforcement became central to the story of {keyword}. \
                The Federal Bureau of Investigation, founded in 1908, handles federal crimes in the United States, while local police deal with most other offenses. \
                Under American law, a suspect is presumed innocent until proven guilty, so reporters use words like 'alleged' and 'charged' carefully. \
                Court records, arrest warrants and official statements are the main sources for crime reporting.",
            advanced: "{when}, the case involving {keyword} entered the criminal justice system, where investigators, prosecutors and defense lawyers each contribute to the public record that journalists rely upon. \
                In the United States, the Federal Bureau of Investigation, established in 1908, investigates federal offenses, while state and local agencies retain jurisdiction over most crimes, producing a layered enforcement system. \
                The presumption of innocence obliges careful reporters to describe suspects as accused or charged until a jury or judge reaches a verdict. \
                Consequently, the language of crime coverage signals precisely how far a case has progressed, from arrest through indictment, trial and sentencing.",
        },
    ),
    (
        Theme::Politics,
        LevelText {
            beginner: "{when}, politics was at the center of this story about {keyword}. \
                The United States has two big parties, Democrats and Republicans. \
                Voters choose a president every four years. \
                Congress makes the laws for the whole nation. \
                Elections often bring big changes in government.",
            intermediate: "{when}, the story of {keyword} became part of the political debate. \
                American politics has been dominated by the Democratic and Republican parties since the Republican Party was founded in 1854. \
                Presidential elections are held every four years, and all 435 seats in the House of Representatives are contested every two years. \
                Because power is split between the president, Congress and the courts, major decisions usually involve long negotiations.",
            advanced: "{when}, {keyword} became entangled in partisan politics, a familiar pattern in a system where almost every policy question is filtered through the rivalry of two dominant parties. \
                The Democratic and Republican parties have alternated in power since the Republican Party's founding in 1854, and winner-take-all elections make it extremely difficult for third parties to win seats in Congress. \
                Separation of powers means that presidential initiatives frequently depend on congressional majorities, judicial review and executive orders that later administrations can reverse. \
                Accordingly, political reporting tends to emphasize vote counts, procedural deadlines and coalition-building, since these determine whether announced plans ever become law.",
        },
    ),
    (
        Theme::International,
        LevelText {
            beginner: "{when}, other nations were part of this story about {keyword}. \
                After World War II ended in 1945, nations formed the United Nations. \
                The UN helps governments talk and solve problems. \
                Nations also sign treaties to make promises to each other. \
                Sometimes they disagree and break these promises.",
            intermediate: "{when}, the story of {keyword} crossed national borders. \
                The modern system of international cooperation took shape after World War II, when 51 founding members created the United Nations in 1945. \
                Since then, treaties, trade agreements and alliances such as NATO have set rules for how governments deal with one another. \
                When a government breaks an agreement, others may respond with diplomacy, sanctions or, in rare cases, military force.",
            advanced: "{when}, {keyword} acquired an international dimension, drawing in governments whose interests are mediated by treaties, alliances and multilateral institutions built over the past eight decades. \
                The postwar order, anchored by the United Nations Charter of 1945 and later by NATO, sought to replace unilateral force with negotiated rules and collective security. \
                That framework has been repeatedly strained, most visibly by the Cold War, the 2003 invasion of Iraq and Russia's full-scale invasion of Ukraine in 2022. \
                Diplomatic reporting therefore weighs official statements against concrete actions such as sanctions, troop movements and votes in the Security Council.",
        },
    ),
    (
        Theme::Economy,
        LevelText {
            beginner: "{when}, money and trade were part of this story about {keyword}. \
                Nations buy and sell goods to each other every day. \
                The United States and China are two of the biggest traders. \
                In 1995, a large group of nations formed the World Trade Organization. \
                Prices go up when goods cost more to make or ship.",
            intermediate: "{when}, economic concerns were at the heart of the story of {keyword}. \
                Since the World Trade Organization was founded in 1995, trade rules have encouraged governments to lower tariffs and open their markets. \
                The United States and China are now the two largest economies, and their trade relationship affects prices for consumers everywhere. \
                Reporters often use figures like inflation rates, unemployment and gross domestic product (GDP) to measure how well an economy is doing.",
            advanced: "{when}, {keyword} became an economic story, one in which prices, employment and trade balances serve as the measurable evidence behind competing political claims. \
                The postwar economic order, built on the Bretton Woods agreements of 1944 and extended by the founding of the World Trade Organization in 1995, rewarded economies that lowered tariffs and joined long supply chains. \
                Rivalry between the United States and China, intensified by tariffs since 2018 and by the supply disruptions of the pandemic, has revived industrial policy as a mainstream objective. \
                Consequently, economic reporting frequently sets headline statistics such as inflation, unemployment and GDP growth against their effects on particular regions and industries.",
        },
    ),
    (
        Theme::Technology,
        LevelText {
            beginner: "{when}, technology was part of this story about {keyword}. \
                The internet opened to the public in 1991. \
                Apple sold the first iPhone in the United States in 2007. \
                Today phones, apps and AI tools are part of daily life. \
                New tools can help people, but they can also cause problems.",
            intermediate: "{when}, digital technology played a central role in the story of {keyword}. \
                Computer science grew quickly after 1946, when ENIAC, one of the first general-purpose computers, was unveiled in the United States. \
                The World Wide Web became public in 1991, and smartphones spread rapidly after 2007. \
                Governments now debate how to regulate data privacy, social media and artificial intelligence.",
            advanced: "{when}, {keyword} came to illustrate how quickly digital tools move from laboratories into everyday life, often faster than legal institutions can adapt. \
                From the unveiling of ENIAC in the United States in 1946 to the public release of the World Wide Web in 1991, computing evolved from a military instrument into the infrastructure of commerce and communication. \
                The smartphone era that began in 2007, followed by the rapid adoption of generative artificial intelligence after 2022, concentrated enormous economic power in a handful of platform companies. \
                Regulators in Europe have responded with data-protection and competition rules, so technology coverage increasingly turns on questions of accountability rather than novelty alone.",
        },
    ),
    (
        Theme::Health,
        LevelText {
            beginner: "{when}, health and medicine were part of this story about {keyword}. \
                The World Health Organization was started in 1948. \
                It helps nations fight dangerous diseases. \
                In 2020, the pandemic closed schools in the United States. \
                Doctors, nurses and scientists worked hard to make vaccines.",
            intermediate: "{when}, public health became a key part of the story of {keyword}. \
                The World Health Organization, founded in 1948, coordinates international efforts against disease. \
                The COVID-19 pandemic, declared in March 2020, showed how quickly a new virus can travel and how differently governments respond. \
                In the United States, health policy often becomes a political issue because of debates over cost, insurance and personal freedom.",
            advanced: "{when}, {keyword} turned on questions of public health, a field in which scientific evidence, government authority and individual liberty are constantly being balanced. \
                Modern public health institutions, from nineteenth-century sanitation boards to the World Health Organization established in 1948, were built on the premise that disease control requires coordinated collective action. \
                The COVID-19 pandemic, declared in March 2020, tested that premise severely, as lockdowns, mask mandates and vaccine requirements provoked intense political conflict in the United States and Europe. \
                Health reporting therefore tends to weigh epidemiological data against questions of cost, access and trust in institutions, particularly when vaccines, drug prices or hospital capacity become matters of public dispute.",
        },
    ),
];

/// Body that follows the fact-led opener built from an article's own signals.
pub const ENTITY_BODY: LevelText = LevelText {
    beginner: "News stories in English put the key facts first. \
        American papers began writing news this way during the Civil War. \
        Look for who, what, where and when in the first lines.",
    intermediate: "Most English-language reports follow the inverted pyramid, which places the newest and most newsworthy facts in the opening lines. \
        American newspapers adopted this structure during the Civil War, when telegraph lines were expensive and could fail at any moment. \
        As a result, the first paragraph of a report usually tells you who was involved, what happened, and where.",
    advanced: "English-language journalism largely follows the inverted pyramid, a structure that American newspapers adopted during the Civil War because telegraph transmission was costly and liable to be interrupted mid-report. \
        Consequently, the decisive facts, namely who acted, where and when, tend to appear in the opening lines, while later paragraphs supply background, reaction and analysis.",
};

/// Paragraphs for articles with no usable names, places or dates.
pub const TOPIC_TABLE: &[(&[Topic], LevelText)] = &[
    (
        &[Topic::Climate],
        LevelText {
            beginner: "In 2015, almost every nation signed the Paris Agreement on climate change. \
                The goal is to keep warming well below 2 degrees. \
                Burning coal, oil and gas makes the planet warmer. \
                Rich and poor nations argue about who should pay. \
                Young people in Europe and America often march for climate action.",
            intermediate: "In 2015, 196 parties adopted the Paris Agreement, promising to limit global warming to well below 2 degrees Celsius. \
                The deal built on the Kyoto Protocol of 1997, which had set binding targets only for developed economies. \
                Developing nations such as India argue that wealthy economies caused most historical emissions and should pay more for the transition. \
                Each year, a United Nations summit known as the COP reviews progress, and the talks often end with hard-fought compromises.",
            advanced: "The Paris Agreement of 2015, adopted by 196 parties, replaced the narrowly applied targets of the 1997 Kyoto Protocol with nationally determined contributions that every signatory must periodically strengthen. \
                This arrangement was a compromise between industrialized economies, which bear responsibility for most cumulative emissions, and emerging economies such as China and India, whose output is rising fastest. \
                Annual United Nations climate summits have since become arenas in which climate finance, loss and damage, and the phase-out of fossil fuels are negotiated under intense scrutiny. \
                Consequently, coverage of climate policy often centers on the gap between announced pledges and measurable reductions in greenhouse gas output.",
        },
    ),
    (
        &[Topic::ArtificialIntelligence, Topic::Technology],
        LevelText {
            beginner: "In 2022, the chatbot ChatGPT was released in the United States. \
                Millions of people tried it in a few weeks. \
                AI tools can write, draw and answer questions. \
                Some workers worry that AI will take their jobs. \
                Governments are writing new rules for AI tools.",
            intermediate: "In November 2022, the American company OpenAI released ChatGPT, which gained over 100 million users within two months. \
                The technology builds on decades of research, including the neural networks that scientists studied long before computers were fast enough to use them. \
                Supporters say AI can make work faster and medicine more accurate, while critics point to job losses, bias and misinformation. \
                In 2024, the European Union approved the AI Act, one of the first broad laws regulating artificial intelligence.",
            advanced: "The public release of ChatGPT by the American company OpenAI in November 2022 transformed artificial intelligence from a specialized research field into a consumer technology used by hundreds of millions of people. \
                Its underlying language models extend decades of work on neural networks, but their capacity to generate fluent text has raised new questions about authorship, labor displacement and the reliability of information. \
                The European Union responded with the AI Act of 2024, which classifies applications by risk, whereas the United States has relied largely on executive guidance and voluntary industry commitments. \
                These divergent regulatory philosophies mean that reporting on AI frequently contrasts commercial ambition with concerns about accountability and public trust.",
        },
    ),
    (
        &[Topic::Politics],
        LevelText {
            beginner: "The United States has had two main parties since 1854. \
                They are the Democrats and the Republicans. \
                Americans vote for a president every four years. \
                Congress has two parts, the House and the Senate. \
                Each party wants to win more seats in Congress.",
            intermediate: "Since the Republican Party was founded in 1854, American politics has been dominated by two major parties. \
                Democrats and Republicans compete for the presidency every four years and for seats in Congress every two years. \
                Because the system rewards the candidate with the most votes in each district, smaller parties rarely win. \
                Political news often focuses on polls, campaign promises and the balance of power in Washington.",
            advanced: "Since the founding of the Republican Party in 1854, American politics has been organized around two dominant parties, an arrangement reinforced by single-member districts and winner-take-all elections. \
                Constitutional separation of powers divides authority between the presidency, a bicameral Congress and an independent judiciary, so that sweeping change ordinarily requires control of several institutions at once. \
                Partisan polarization has intensified since the 1990s, reducing the number of legislators willing to cross party lines and making procedural tools such as the Senate filibuster central to legislative outcomes. \
                Consequently, political coverage tends to emphasize vote counts, legislative deadlines and shifting coalitions rather than policy details alone, since these determine whether proposals ever reach the president's desk.",
        },
    ),
    (
        &[Topic::InternationalRelations, Topic::UkraineRussia],
        LevelText {
            beginner: "In 1945, after World War II, nations created the United Nations. \
                Today 193 nations are members of the UN. \
                Leaders meet in New York to talk about problems. \
                Nations also make promises to each other in treaties. \
                When talks fail, nations may use sanctions.",
            intermediate: "The United Nations was founded in 1945 by 51 countries that wanted to prevent another world war. \
                Today it has 193 member states, and its Security Council can approve sanctions or peacekeeping missions. \
                Alliances such as NATO, created in 1949, and trade agreements also guide how governments deal with one another. \
                Diplomacy usually moves slowly because every agreement needs support from several governments at once.",
            advanced: "The international order established after World War II, anchored by the founding of the United Nations in 1945 and of NATO in 1949, sought to replace unilateral force with negotiated rules and collective security. \
                The five permanent members of the Security Council retain veto power, a design that has repeatedly paralyzed collective responses to crises in which one of them is directly involved. \
                Regional organizations, trade agreements and bilateral alliances therefore carry much of the practical work of diplomacy, often with uneven results. \
                Diplomatic reporting consequently weighs official communiques against observable actions such as sanctions, troop deployments and votes in bodies such as the General Assembly and the Security Council.",
        },
    ),
];

/// Last resort, keyed only on the article's main keyword.
pub const FINAL: LevelText = LevelText {
    beginner: "Reports about {keyword} follow a pattern used in most English news. \
        The key facts come first. \
        American papers began writing news this way during the Civil War. \
        Look for who, what, where and when in the first lines. \
        Then read on for quotes and more details.",
    intermediate: "Reports about {keyword} follow the structure used in most English-language journalism, known as the inverted pyramid. \
        American newspapers adopted this structure during the Civil War, when telegraph lines were expensive and could fail at any moment. \
        As a result, the first paragraph usually states who was involved, what happened, where and when. \
        Later paragraphs add quotations, background and reactions from other sources.",
    advanced: "Reporting on {keyword} follows the conventions of English-language journalism, in particular the inverted pyramid, which places the most newsworthy facts in the opening lines and leaves context to later paragraphs. \
        American newspapers adopted this structure during the Civil War, when telegraph transmission was costly and liable to be interrupted before a dispatch was complete. \
        Readers who attend to the opening sentences can therefore identify the principal actors, the sequence of events and the claims that later paragraphs attempt to support or qualify. \
        Attribution phrases such as 'according to' or 'officials said' also signal how confident a reporter is in each piece of information.",
};
