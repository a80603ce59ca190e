// Unicode 16.0.0 word-break and Extended_Pictographic ranges, derived from
// WordBreakProperty.txt and emoji-data.txt. Ranges are sorted and disjoint.

pub(crate) mod word {
    use crate::property_ty::WordBreakProperty::{self, *};

    pub(crate) const WORD_BREAK_TABLE: &[(char, char, WordBreakProperty)] = &[
        ('\u{a}', '\u{a}', LF),
        ('\u{b}', '\u{c}', Newline),
        ('\u{d}', '\u{d}', CR),
        ('\u{20}', '\u{20}', WSegSpace),
        ('\u{22}', '\u{22}', DoubleQuote),
        ('\u{27}', '\u{27}', SingleQuote),
        ('\u{2c}', '\u{2c}', MidNum),
        ('\u{2e}', '\u{2e}', MidNumLet),
        ('\u{30}', '\u{39}', Numeric),
        ('\u{3a}', '\u{3a}', MidLetter),
        ('\u{3b}', '\u{3b}', MidNum),
        ('\u{41}', '\u{5a}', ALetter),
        ('\u{5f}', '\u{5f}', ExtendNumLet),
        ('\u{61}', '\u{7a}', ALetter),
        ('\u{85}', '\u{85}', Newline),
        ('\u{aa}', '\u{aa}', ALetter),
        ('\u{ad}', '\u{ad}', Format),
        ('\u{b5}', '\u{b5}', ALetter),
        ('\u{b7}', '\u{b7}', MidLetter),
        ('\u{ba}', '\u{ba}', ALetter),
        ('\u{c0}', '\u{d6}', ALetter),
        ('\u{d8}', '\u{f6}', ALetter),
        ('\u{f8}', '\u{2d7}', ALetter),
        ('\u{2de}', '\u{2ff}', ALetter),
        ('\u{300}', '\u{36f}', Extend),
        ('\u{370}', '\u{374}', ALetter),
        ('\u{376}', '\u{377}', ALetter),
        ('\u{37a}', '\u{37d}', ALetter),
        ('\u{37e}', '\u{37e}', MidNum),
        ('\u{37f}', '\u{37f}', ALetter),
        ('\u{386}', '\u{386}', ALetter),
        ('\u{387}', '\u{387}', MidLetter),
        ('\u{388}', '\u{38a}', ALetter),
        ('\u{38c}', '\u{38c}', ALetter),
        ('\u{38e}', '\u{3a1}', ALetter),
        ('\u{3a3}', '\u{3f5}', ALetter),
        ('\u{3f7}', '\u{481}', ALetter),
        ('\u{483}', '\u{489}', Extend),
        ('\u{48a}', '\u{52f}', ALetter),
        ('\u{531}', '\u{556}', ALetter),
        ('\u{559}', '\u{55c}', ALetter),
        ('\u{55e}', '\u{55e}', ALetter),
        ('\u{55f}', '\u{55f}', MidLetter),
        ('\u{560}', '\u{588}', ALetter),
        ('\u{589}', '\u{589}', MidNum),
        ('\u{58a}', '\u{58a}', ALetter),
        ('\u{591}', '\u{5bd}', Extend),
        ('\u{5bf}', '\u{5bf}', Extend),
        ('\u{5c1}', '\u{5c2}', Extend),
        ('\u{5c4}', '\u{5c5}', Extend),
        ('\u{5c7}', '\u{5c7}', Extend),
        ('\u{5d0}', '\u{5ea}', HebrewLetter),
        ('\u{5ef}', '\u{5f2}', HebrewLetter),
        ('\u{5f3}', '\u{5f3}', ALetter),
        ('\u{5f4}', '\u{5f4}', MidLetter),
        ('\u{600}', '\u{605}', Numeric),
        ('\u{60c}', '\u{60d}', MidNum),
        ('\u{610}', '\u{61a}', Extend),
        ('\u{61c}', '\u{61c}', Format),
        ('\u{620}', '\u{64a}', ALetter),
        ('\u{64b}', '\u{65f}', Extend),
        ('\u{660}', '\u{669}', Numeric),
        ('\u{66b}', '\u{66b}', Numeric),
        ('\u{66c}', '\u{66c}', MidNum),
        ('\u{66e}', '\u{66f}', ALetter),
        ('\u{670}', '\u{670}', Extend),
        ('\u{671}', '\u{6d3}', ALetter),
        ('\u{6d5}', '\u{6d5}', ALetter),
        ('\u{6d6}', '\u{6dc}', Extend),
        ('\u{6dd}', '\u{6dd}', Numeric),
        ('\u{6df}', '\u{6e4}', Extend),
        ('\u{6e5}', '\u{6e6}', ALetter),
        ('\u{6e7}', '\u{6e8}', Extend),
        ('\u{6ea}', '\u{6ed}', Extend),
        ('\u{6ee}', '\u{6ef}', ALetter),
        ('\u{6f0}', '\u{6f9}', Numeric),
        ('\u{6fa}', '\u{6fc}', ALetter),
        ('\u{6ff}', '\u{6ff}', ALetter),
        ('\u{70f}', '\u{710}', ALetter),
        ('\u{711}', '\u{711}', Extend),
        ('\u{712}', '\u{72f}', ALetter),
        ('\u{730}', '\u{74a}', Extend),
        ('\u{74d}', '\u{7a5}', ALetter),
        ('\u{7a6}', '\u{7b0}', Extend),
        ('\u{7b1}', '\u{7b1}', ALetter),
        ('\u{7c0}', '\u{7c9}', Numeric),
        ('\u{7ca}', '\u{7ea}', ALetter),
        ('\u{7eb}', '\u{7f3}', Extend),
        ('\u{7f4}', '\u{7f5}', ALetter),
        ('\u{7f8}', '\u{7f8}', MidNum),
        ('\u{7fa}', '\u{7fa}', ALetter),
        ('\u{7fd}', '\u{7fd}', Extend),
        ('\u{800}', '\u{815}', ALetter),
        ('\u{816}', '\u{819}', Extend),
        ('\u{81a}', '\u{81a}', ALetter),
        ('\u{81b}', '\u{823}', Extend),
        ('\u{824}', '\u{824}', ALetter),
        ('\u{825}', '\u{827}', Extend),
        ('\u{828}', '\u{828}', ALetter),
        ('\u{829}', '\u{82d}', Extend),
        ('\u{840}', '\u{858}', ALetter),
        ('\u{859}', '\u{85b}', Extend),
        ('\u{860}', '\u{86a}', ALetter),
        ('\u{870}', '\u{887}', ALetter),
        ('\u{889}', '\u{88e}', ALetter),
        ('\u{890}', '\u{891}', Numeric),
        ('\u{897}', '\u{89f}', Extend),
        ('\u{8a0}', '\u{8c9}', ALetter),
        ('\u{8ca}', '\u{8e1}', Extend),
        ('\u{8e2}', '\u{8e2}', Numeric),
        ('\u{8e3}', '\u{903}', Extend),
        ('\u{904}', '\u{939}', ALetter),
        ('\u{93a}', '\u{93c}', Extend),
        ('\u{93d}', '\u{93d}', ALetter),
        ('\u{93e}', '\u{94f}', Extend),
        ('\u{950}', '\u{950}', ALetter),
        ('\u{951}', '\u{957}', Extend),
        ('\u{958}', '\u{961}', ALetter),
        ('\u{962}', '\u{963}', Extend),
        ('\u{966}', '\u{96f}', Numeric),
        ('\u{971}', '\u{980}', ALetter),
        ('\u{981}', '\u{983}', Extend),
        ('\u{985}', '\u{98c}', ALetter),
        ('\u{98f}', '\u{990}', ALetter),
        ('\u{993}', '\u{9a8}', ALetter),
        ('\u{9aa}', '\u{9b0}', ALetter),
        ('\u{9b2}', '\u{9b2}', ALetter),
        ('\u{9b6}', '\u{9b9}', ALetter),
        ('\u{9bc}', '\u{9bc}', Extend),
        ('\u{9bd}', '\u{9bd}', ALetter),
        ('\u{9be}', '\u{9c4}', Extend),
        ('\u{9c7}', '\u{9c8}', Extend),
        ('\u{9cb}', '\u{9cd}', Extend),
        ('\u{9ce}', '\u{9ce}', ALetter),
        ('\u{9d7}', '\u{9d7}', Extend),
        ('\u{9dc}', '\u{9dd}', ALetter),
        ('\u{9df}', '\u{9e1}', ALetter),
        ('\u{9e2}', '\u{9e3}', Extend),
        ('\u{9e6}', '\u{9ef}', Numeric),
        ('\u{9f0}', '\u{9f1}', ALetter),
        ('\u{9fc}', '\u{9fc}', ALetter),
        ('\u{9fe}', '\u{9fe}', Extend),
        ('\u{a01}', '\u{a03}', Extend),
        ('\u{a05}', '\u{a0a}', ALetter),
        ('\u{a0f}', '\u{a10}', ALetter),
        ('\u{a13}', '\u{a28}', ALetter),
        ('\u{a2a}', '\u{a30}', ALetter),
        ('\u{a32}', '\u{a33}', ALetter),
        ('\u{a35}', '\u{a36}', ALetter),
        ('\u{a38}', '\u{a39}', ALetter),
        ('\u{a3c}', '\u{a3c}', Extend),
        ('\u{a3e}', '\u{a42}', Extend),
        ('\u{a47}', '\u{a48}', Extend),
        ('\u{a4b}', '\u{a4d}', Extend),
        ('\u{a51}', '\u{a51}', Extend),
        ('\u{a59}', '\u{a5c}', ALetter),
        ('\u{a5e}', '\u{a5e}', ALetter),
        ('\u{a66}', '\u{a6f}', Numeric),
        ('\u{a70}', '\u{a71}', Extend),
        ('\u{a72}', '\u{a74}', ALetter),
        ('\u{a75}', '\u{a75}', Extend),
        ('\u{a81}', '\u{a83}', Extend),
        ('\u{a85}', '\u{a8d}', ALetter),
        ('\u{a8f}', '\u{a91}', ALetter),
        ('\u{a93}', '\u{aa8}', ALetter),
        ('\u{aaa}', '\u{ab0}', ALetter),
        ('\u{ab2}', '\u{ab3}', ALetter),
        ('\u{ab5}', '\u{ab9}', ALetter),
        ('\u{abc}', '\u{abc}', Extend),
        ('\u{abd}', '\u{abd}', ALetter),
        ('\u{abe}', '\u{ac5}', Extend),
        ('\u{ac7}', '\u{ac9}', Extend),
        ('\u{acb}', '\u{acd}', Extend),
        ('\u{ad0}', '\u{ad0}', ALetter),
        ('\u{ae0}', '\u{ae1}', ALetter),
        ('\u{ae2}', '\u{ae3}', Extend),
        ('\u{ae6}', '\u{aef}', Numeric),
        ('\u{af9}', '\u{af9}', ALetter),
        ('\u{afa}', '\u{aff}', Extend),
        ('\u{b01}', '\u{b03}', Extend),
        ('\u{b05}', '\u{b0c}', ALetter),
        ('\u{b0f}', '\u{b10}', ALetter),
        ('\u{b13}', '\u{b28}', ALetter),
        ('\u{b2a}', '\u{b30}', ALetter),
        ('\u{b32}', '\u{b33}', ALetter),
        ('\u{b35}', '\u{b39}', ALetter),
        ('\u{b3c}', '\u{b3c}', Extend),
        ('\u{b3d}', '\u{b3d}', ALetter),
        ('\u{b3e}', '\u{b44}', Extend),
        ('\u{b47}', '\u{b48}', Extend),
        ('\u{b4b}', '\u{b4d}', Extend),
        ('\u{b55}', '\u{b57}', Extend),
        ('\u{b5c}', '\u{b5d}', ALetter),
        ('\u{b5f}', '\u{b61}', ALetter),
        ('\u{b62}', '\u{b63}', Extend),
        ('\u{b66}', '\u{b6f}', Numeric),
        ('\u{b71}', '\u{b71}', ALetter),
        ('\u{b82}', '\u{b82}', Extend),
        ('\u{b83}', '\u{b83}', ALetter),
        ('\u{b85}', '\u{b8a}', ALetter),
        ('\u{b8e}', '\u{b90}', ALetter),
        ('\u{b92}', '\u{b95}', ALetter),
        ('\u{b99}', '\u{b9a}', ALetter),
        ('\u{b9c}', '\u{b9c}', ALetter),
        ('\u{b9e}', '\u{b9f}', ALetter),
        ('\u{ba3}', '\u{ba4}', ALetter),
        ('\u{ba8}', '\u{baa}', ALetter),
        ('\u{bae}', '\u{bb9}', ALetter),
        ('\u{bbe}', '\u{bc2}', Extend),
        ('\u{bc6}', '\u{bc8}', Extend),
        ('\u{bca}', '\u{bcd}', Extend),
        ('\u{bd0}', '\u{bd0}', ALetter),
        ('\u{bd7}', '\u{bd7}', Extend),
        ('\u{be6}', '\u{bef}', Numeric),
        ('\u{c00}', '\u{c04}', Extend),
        ('\u{c05}', '\u{c0c}', ALetter),
        ('\u{c0e}', '\u{c10}', ALetter),
        ('\u{c12}', '\u{c28}', ALetter),
        ('\u{c2a}', '\u{c39}', ALetter),
        ('\u{c3c}', '\u{c3c}', Extend),
        ('\u{c3d}', '\u{c3d}', ALetter),
        ('\u{c3e}', '\u{c44}', Extend),
        ('\u{c46}', '\u{c48}', Extend),
        ('\u{c4a}', '\u{c4d}', Extend),
        ('\u{c55}', '\u{c56}', Extend),
        ('\u{c58}', '\u{c5a}', ALetter),
        ('\u{c5d}', '\u{c5d}', ALetter),
        ('\u{c60}', '\u{c61}', ALetter),
        ('\u{c62}', '\u{c63}', Extend),
        ('\u{c66}', '\u{c6f}', Numeric),
        ('\u{c80}', '\u{c80}', ALetter),
        ('\u{c81}', '\u{c83}', Extend),
        ('\u{c85}', '\u{c8c}', ALetter),
        ('\u{c8e}', '\u{c90}', ALetter),
        ('\u{c92}', '\u{ca8}', ALetter),
        ('\u{caa}', '\u{cb3}', ALetter),
        ('\u{cb5}', '\u{cb9}', ALetter),
        ('\u{cbc}', '\u{cbc}', Extend),
        ('\u{cbd}', '\u{cbd}', ALetter),
        ('\u{cbe}', '\u{cc4}', Extend),
        ('\u{cc6}', '\u{cc8}', Extend),
        ('\u{cca}', '\u{ccd}', Extend),
        ('\u{cd5}', '\u{cd6}', Extend),
        ('\u{cdd}', '\u{cde}', ALetter),
        ('\u{ce0}', '\u{ce1}', ALetter),
        ('\u{ce2}', '\u{ce3}', Extend),
        ('\u{ce6}', '\u{cef}', Numeric),
        ('\u{cf1}', '\u{cf2}', ALetter),
        ('\u{cf3}', '\u{cf3}', Extend),
        ('\u{d00}', '\u{d03}', Extend),
        ('\u{d04}', '\u{d0c}', ALetter),
        ('\u{d0e}', '\u{d10}', ALetter),
        ('\u{d12}', '\u{d3a}', ALetter),
        ('\u{d3b}', '\u{d3c}', Extend),
        ('\u{d3d}', '\u{d3d}', ALetter),
        ('\u{d3e}', '\u{d44}', Extend),
        ('\u{d46}', '\u{d48}', Extend),
        ('\u{d4a}', '\u{d4d}', Extend),
        ('\u{d4e}', '\u{d4e}', ALetter),
        ('\u{d54}', '\u{d56}', ALetter),
        ('\u{d57}', '\u{d57}', Extend),
        ('\u{d5f}', '\u{d61}', ALetter),
        ('\u{d62}', '\u{d63}', Extend),
        ('\u{d66}', '\u{d6f}', Numeric),
        ('\u{d7a}', '\u{d7f}', ALetter),
        ('\u{d81}', '\u{d83}', Extend),
        ('\u{d85}', '\u{d96}', ALetter),
        ('\u{d9a}', '\u{db1}', ALetter),
        ('\u{db3}', '\u{dbb}', ALetter),
        ('\u{dbd}', '\u{dbd}', ALetter),
        ('\u{dc0}', '\u{dc6}', ALetter),
        ('\u{dca}', '\u{dca}', Extend),
        ('\u{dcf}', '\u{dd4}', Extend),
        ('\u{dd6}', '\u{dd6}', Extend),
        ('\u{dd8}', '\u{ddf}', Extend),
        ('\u{de6}', '\u{def}', Numeric),
        ('\u{df2}', '\u{df3}', Extend),
        ('\u{e31}', '\u{e31}', Extend),
        ('\u{e34}', '\u{e3a}', Extend),
        ('\u{e47}', '\u{e4e}', Extend),
        ('\u{e50}', '\u{e59}', Numeric),
        ('\u{eb1}', '\u{eb1}', Extend),
        ('\u{eb4}', '\u{ebc}', Extend),
        ('\u{ec8}', '\u{ece}', Extend),
        ('\u{ed0}', '\u{ed9}', Numeric),
        ('\u{f00}', '\u{f00}', ALetter),
        ('\u{f18}', '\u{f19}', Extend),
        ('\u{f20}', '\u{f29}', Numeric),
        ('\u{f35}', '\u{f35}', Extend),
        ('\u{f37}', '\u{f37}', Extend),
        ('\u{f39}', '\u{f39}', Extend),
        ('\u{f3e}', '\u{f3f}', Extend),
        ('\u{f40}', '\u{f47}', ALetter),
        ('\u{f49}', '\u{f6c}', ALetter),
        ('\u{f71}', '\u{f84}', Extend),
        ('\u{f86}', '\u{f87}', Extend),
        ('\u{f88}', '\u{f8c}', ALetter),
        ('\u{f8d}', '\u{f97}', Extend),
        ('\u{f99}', '\u{fbc}', Extend),
        ('\u{fc6}', '\u{fc6}', Extend),
        ('\u{102b}', '\u{103e}', Extend),
        ('\u{1040}', '\u{1049}', Numeric),
        ('\u{1056}', '\u{1059}', Extend),
        ('\u{105e}', '\u{1060}', Extend),
        ('\u{1062}', '\u{1064}', Extend),
        ('\u{1067}', '\u{106d}', Extend),
        ('\u{1071}', '\u{1074}', Extend),
        ('\u{1082}', '\u{108d}', Extend),
        ('\u{108f}', '\u{108f}', Extend),
        ('\u{1090}', '\u{1099}', Numeric),
        ('\u{109a}', '\u{109d}', Extend),
        ('\u{10a0}', '\u{10c5}', ALetter),
        ('\u{10c7}', '\u{10c7}', ALetter),
        ('\u{10cd}', '\u{10cd}', ALetter),
        ('\u{10d0}', '\u{10fa}', ALetter),
        ('\u{10fc}', '\u{1248}', ALetter),
        ('\u{124a}', '\u{124d}', ALetter),
        ('\u{1250}', '\u{1256}', ALetter),
        ('\u{1258}', '\u{1258}', ALetter),
        ('\u{125a}', '\u{125d}', ALetter),
        ('\u{1260}', '\u{1288}', ALetter),
        ('\u{128a}', '\u{128d}', ALetter),
        ('\u{1290}', '\u{12b0}', ALetter),
        ('\u{12b2}', '\u{12b5}', ALetter),
        ('\u{12b8}', '\u{12be}', ALetter),
        ('\u{12c0}', '\u{12c0}', ALetter),
        ('\u{12c2}', '\u{12c5}', ALetter),
        ('\u{12c8}', '\u{12d6}', ALetter),
        ('\u{12d8}', '\u{1310}', ALetter),
        ('\u{1312}', '\u{1315}', ALetter),
        ('\u{1318}', '\u{135a}', ALetter),
        ('\u{135d}', '\u{135f}', Extend),
        ('\u{1380}', '\u{138f}', ALetter),
        ('\u{13a0}', '\u{13f5}', ALetter),
        ('\u{13f8}', '\u{13fd}', ALetter),
        ('\u{1401}', '\u{166c}', ALetter),
        ('\u{166f}', '\u{167f}', ALetter),
        ('\u{1680}', '\u{1680}', WSegSpace),
        ('\u{1681}', '\u{169a}', ALetter),
        ('\u{16a0}', '\u{16ea}', ALetter),
        ('\u{16ee}', '\u{16f8}', ALetter),
        ('\u{1700}', '\u{1711}', ALetter),
        ('\u{1712}', '\u{1715}', Extend),
        ('\u{171f}', '\u{1731}', ALetter),
        ('\u{1732}', '\u{1734}', Extend),
        ('\u{1740}', '\u{1751}', ALetter),
        ('\u{1752}', '\u{1753}', Extend),
        ('\u{1760}', '\u{176c}', ALetter),
        ('\u{176e}', '\u{1770}', ALetter),
        ('\u{1772}', '\u{1773}', Extend),
        ('\u{17b4}', '\u{17d3}', Extend),
        ('\u{17dd}', '\u{17dd}', Extend),
        ('\u{17e0}', '\u{17e9}', Numeric),
        ('\u{180b}', '\u{180d}', Extend),
        ('\u{180e}', '\u{180e}', Format),
        ('\u{180f}', '\u{180f}', Extend),
        ('\u{1810}', '\u{1819}', Numeric),
        ('\u{1820}', '\u{1878}', ALetter),
        ('\u{1880}', '\u{1884}', ALetter),
        ('\u{1885}', '\u{1886}', Extend),
        ('\u{1887}', '\u{18a8}', ALetter),
        ('\u{18a9}', '\u{18a9}', Extend),
        ('\u{18aa}', '\u{18aa}', ALetter),
        ('\u{18b0}', '\u{18f5}', ALetter),
        ('\u{1900}', '\u{191e}', ALetter),
        ('\u{1920}', '\u{192b}', Extend),
        ('\u{1930}', '\u{193b}', Extend),
        ('\u{1946}', '\u{194f}', Numeric),
        ('\u{19d0}', '\u{19da}', Numeric),
        ('\u{1a00}', '\u{1a16}', ALetter),
        ('\u{1a17}', '\u{1a1b}', Extend),
        ('\u{1a55}', '\u{1a5e}', Extend),
        ('\u{1a60}', '\u{1a7c}', Extend),
        ('\u{1a7f}', '\u{1a7f}', Extend),
        ('\u{1a80}', '\u{1a89}', Numeric),
        ('\u{1a90}', '\u{1a99}', Numeric),
        ('\u{1ab0}', '\u{1ace}', Extend),
        ('\u{1b00}', '\u{1b04}', Extend),
        ('\u{1b05}', '\u{1b33}', ALetter),
        ('\u{1b34}', '\u{1b44}', Extend),
        ('\u{1b45}', '\u{1b4c}', ALetter),
        ('\u{1b50}', '\u{1b59}', Numeric),
        ('\u{1b6b}', '\u{1b73}', Extend),
        ('\u{1b80}', '\u{1b82}', Extend),
        ('\u{1b83}', '\u{1ba0}', ALetter),
        ('\u{1ba1}', '\u{1bad}', Extend),
        ('\u{1bae}', '\u{1baf}', ALetter),
        ('\u{1bb0}', '\u{1bb9}', Numeric),
        ('\u{1bba}', '\u{1be5}', ALetter),
        ('\u{1be6}', '\u{1bf3}', Extend),
        ('\u{1c00}', '\u{1c23}', ALetter),
        ('\u{1c24}', '\u{1c37}', Extend),
        ('\u{1c40}', '\u{1c49}', Numeric),
        ('\u{1c4d}', '\u{1c4f}', ALetter),
        ('\u{1c50}', '\u{1c59}', Numeric),
        ('\u{1c5a}', '\u{1c7d}', ALetter),
        ('\u{1c80}', '\u{1c8a}', ALetter),
        ('\u{1c90}', '\u{1cba}', ALetter),
        ('\u{1cbd}', '\u{1cbf}', ALetter),
        ('\u{1cd0}', '\u{1cd2}', Extend),
        ('\u{1cd4}', '\u{1ce8}', Extend),
        ('\u{1ce9}', '\u{1cec}', ALetter),
        ('\u{1ced}', '\u{1ced}', Extend),
        ('\u{1cee}', '\u{1cf3}', ALetter),
        ('\u{1cf4}', '\u{1cf4}', Extend),
        ('\u{1cf5}', '\u{1cf6}', ALetter),
        ('\u{1cf7}', '\u{1cf9}', Extend),
        ('\u{1cfa}', '\u{1cfa}', ALetter),
        ('\u{1d00}', '\u{1dbf}', ALetter),
        ('\u{1dc0}', '\u{1dff}', Extend),
        ('\u{1e00}', '\u{1f15}', ALetter),
        ('\u{1f18}', '\u{1f1d}', ALetter),
        ('\u{1f20}', '\u{1f45}', ALetter),
        ('\u{1f48}', '\u{1f4d}', ALetter),
        ('\u{1f50}', '\u{1f57}', ALetter),
        ('\u{1f59}', '\u{1f59}', ALetter),
        ('\u{1f5b}', '\u{1f5b}', ALetter),
        ('\u{1f5d}', '\u{1f5d}', ALetter),
        ('\u{1f5f}', '\u{1f7d}', ALetter),
        ('\u{1f80}', '\u{1fb4}', ALetter),
        ('\u{1fb6}', '\u{1fbc}', ALetter),
        ('\u{1fbe}', '\u{1fbe}', ALetter),
        ('\u{1fc2}', '\u{1fc4}', ALetter),
        ('\u{1fc6}', '\u{1fcc}', ALetter),
        ('\u{1fd0}', '\u{1fd3}', ALetter),
        ('\u{1fd6}', '\u{1fdb}', ALetter),
        ('\u{1fe0}', '\u{1fec}', ALetter),
        ('\u{1ff2}', '\u{1ff4}', ALetter),
        ('\u{1ff6}', '\u{1ffc}', ALetter),
        ('\u{2000}', '\u{2006}', WSegSpace),
        ('\u{2008}', '\u{200a}', WSegSpace),
        ('\u{200c}', '\u{200c}', Extend),
        ('\u{200d}', '\u{200d}', ZWJ),
        ('\u{200e}', '\u{200f}', Format),
        ('\u{2018}', '\u{2019}', MidNumLet),
        ('\u{2024}', '\u{2024}', MidNumLet),
        ('\u{2027}', '\u{2027}', MidLetter),
        ('\u{2028}', '\u{2029}', Newline),
        ('\u{202a}', '\u{202e}', Format),
        ('\u{202f}', '\u{202f}', ExtendNumLet),
        ('\u{203f}', '\u{2040}', ExtendNumLet),
        ('\u{2044}', '\u{2044}', MidNum),
        ('\u{2054}', '\u{2054}', ExtendNumLet),
        ('\u{205f}', '\u{205f}', WSegSpace),
        ('\u{2060}', '\u{2064}', Format),
        ('\u{2066}', '\u{206f}', Format),
        ('\u{2071}', '\u{2071}', ALetter),
        ('\u{207f}', '\u{207f}', ALetter),
        ('\u{2090}', '\u{209c}', ALetter),
        ('\u{20d0}', '\u{20f0}', Extend),
        ('\u{2102}', '\u{2102}', ALetter),
        ('\u{2107}', '\u{2107}', ALetter),
        ('\u{210a}', '\u{2113}', ALetter),
        ('\u{2115}', '\u{2115}', ALetter),
        ('\u{2119}', '\u{211d}', ALetter),
        ('\u{2124}', '\u{2124}', ALetter),
        ('\u{2126}', '\u{2126}', ALetter),
        ('\u{2128}', '\u{2128}', ALetter),
        ('\u{212a}', '\u{212d}', ALetter),
        ('\u{212f}', '\u{2139}', ALetter),
        ('\u{213c}', '\u{213f}', ALetter),
        ('\u{2145}', '\u{2149}', ALetter),
        ('\u{214e}', '\u{214e}', ALetter),
        ('\u{2160}', '\u{2188}', ALetter),
        ('\u{24b6}', '\u{24e9}', ALetter),
        ('\u{2c00}', '\u{2ce4}', ALetter),
        ('\u{2ceb}', '\u{2cee}', ALetter),
        ('\u{2cef}', '\u{2cf1}', Extend),
        ('\u{2cf2}', '\u{2cf3}', ALetter),
        ('\u{2d00}', '\u{2d25}', ALetter),
        ('\u{2d27}', '\u{2d27}', ALetter),
        ('\u{2d2d}', '\u{2d2d}', ALetter),
        ('\u{2d30}', '\u{2d67}', ALetter),
        ('\u{2d6f}', '\u{2d6f}', ALetter),
        ('\u{2d7f}', '\u{2d7f}', Extend),
        ('\u{2d80}', '\u{2d96}', ALetter),
        ('\u{2da0}', '\u{2da6}', ALetter),
        ('\u{2da8}', '\u{2dae}', ALetter),
        ('\u{2db0}', '\u{2db6}', ALetter),
        ('\u{2db8}', '\u{2dbe}', ALetter),
        ('\u{2dc0}', '\u{2dc6}', ALetter),
        ('\u{2dc8}', '\u{2dce}', ALetter),
        ('\u{2dd0}', '\u{2dd6}', ALetter),
        ('\u{2dd8}', '\u{2dde}', ALetter),
        ('\u{2de0}', '\u{2dff}', Extend),
        ('\u{2e2f}', '\u{2e2f}', ALetter),
        ('\u{3000}', '\u{3000}', WSegSpace),
        ('\u{3005}', '\u{3005}', ALetter),
        ('\u{302a}', '\u{302f}', Extend),
        ('\u{3031}', '\u{3035}', Katakana),
        ('\u{303b}', '\u{303c}', ALetter),
        ('\u{3099}', '\u{309a}', Extend),
        ('\u{309b}', '\u{309c}', Katakana),
        ('\u{30a0}', '\u{30fa}', Katakana),
        ('\u{30fc}', '\u{30ff}', Katakana),
        ('\u{3105}', '\u{312f}', ALetter),
        ('\u{3131}', '\u{318e}', ALetter),
        ('\u{31a0}', '\u{31bf}', ALetter),
        ('\u{31f0}', '\u{31ff}', Katakana),
        ('\u{32d0}', '\u{32fe}', Katakana),
        ('\u{3300}', '\u{3357}', Katakana),
        ('\u{a000}', '\u{a48c}', ALetter),
        ('\u{a4d0}', '\u{a4fd}', ALetter),
        ('\u{a500}', '\u{a60c}', ALetter),
        ('\u{a610}', '\u{a61f}', ALetter),
        ('\u{a620}', '\u{a629}', Numeric),
        ('\u{a62a}', '\u{a62b}', ALetter),
        ('\u{a640}', '\u{a66e}', ALetter),
        ('\u{a66f}', '\u{a672}', Extend),
        ('\u{a674}', '\u{a67d}', Extend),
        ('\u{a67f}', '\u{a69d}', ALetter),
        ('\u{a69e}', '\u{a69f}', Extend),
        ('\u{a6a0}', '\u{a6ef}', ALetter),
        ('\u{a6f0}', '\u{a6f1}', Extend),
        ('\u{a708}', '\u{a7cd}', ALetter),
        ('\u{a7d0}', '\u{a7d1}', ALetter),
        ('\u{a7d3}', '\u{a7d3}', ALetter),
        ('\u{a7d5}', '\u{a7dc}', ALetter),
        ('\u{a7f2}', '\u{a801}', ALetter),
        ('\u{a802}', '\u{a802}', Extend),
        ('\u{a803}', '\u{a805}', ALetter),
        ('\u{a806}', '\u{a806}', Extend),
        ('\u{a807}', '\u{a80a}', ALetter),
        ('\u{a80b}', '\u{a80b}', Extend),
        ('\u{a80c}', '\u{a822}', ALetter),
        ('\u{a823}', '\u{a827}', Extend),
        ('\u{a82c}', '\u{a82c}', Extend),
        ('\u{a840}', '\u{a873}', ALetter),
        ('\u{a880}', '\u{a881}', Extend),
        ('\u{a882}', '\u{a8b3}', ALetter),
        ('\u{a8b4}', '\u{a8c5}', Extend),
        ('\u{a8d0}', '\u{a8d9}', Numeric),
        ('\u{a8e0}', '\u{a8f1}', Extend),
        ('\u{a8f2}', '\u{a8f7}', ALetter),
        ('\u{a8fb}', '\u{a8fb}', ALetter),
        ('\u{a8fd}', '\u{a8fe}', ALetter),
        ('\u{a8ff}', '\u{a8ff}', Extend),
        ('\u{a900}', '\u{a909}', Numeric),
        ('\u{a90a}', '\u{a925}', ALetter),
        ('\u{a926}', '\u{a92d}', Extend),
        ('\u{a930}', '\u{a946}', ALetter),
        ('\u{a947}', '\u{a953}', Extend),
        ('\u{a960}', '\u{a97c}', ALetter),
        ('\u{a980}', '\u{a983}', Extend),
        ('\u{a984}', '\u{a9b2}', ALetter),
        ('\u{a9b3}', '\u{a9c0}', Extend),
        ('\u{a9cf}', '\u{a9cf}', ALetter),
        ('\u{a9d0}', '\u{a9d9}', Numeric),
        ('\u{a9e5}', '\u{a9e5}', Extend),
        ('\u{a9f0}', '\u{a9f9}', Numeric),
        ('\u{aa00}', '\u{aa28}', ALetter),
        ('\u{aa29}', '\u{aa36}', Extend),
        ('\u{aa40}', '\u{aa42}', ALetter),
        ('\u{aa43}', '\u{aa43}', Extend),
        ('\u{aa44}', '\u{aa4b}', ALetter),
        ('\u{aa4c}', '\u{aa4d}', Extend),
        ('\u{aa50}', '\u{aa59}', Numeric),
        ('\u{aa7b}', '\u{aa7d}', Extend),
        ('\u{aab0}', '\u{aab0}', Extend),
        ('\u{aab2}', '\u{aab4}', Extend),
        ('\u{aab7}', '\u{aab8}', Extend),
        ('\u{aabe}', '\u{aabf}', Extend),
        ('\u{aac1}', '\u{aac1}', Extend),
        ('\u{aae0}', '\u{aaea}', ALetter),
        ('\u{aaeb}', '\u{aaef}', Extend),
        ('\u{aaf2}', '\u{aaf4}', ALetter),
        ('\u{aaf5}', '\u{aaf6}', Extend),
        ('\u{ab01}', '\u{ab06}', ALetter),
        ('\u{ab09}', '\u{ab0e}', ALetter),
        ('\u{ab11}', '\u{ab16}', ALetter),
        ('\u{ab20}', '\u{ab26}', ALetter),
        ('\u{ab28}', '\u{ab2e}', ALetter),
        ('\u{ab30}', '\u{ab69}', ALetter),
        ('\u{ab70}', '\u{abe2}', ALetter),
        ('\u{abe3}', '\u{abea}', Extend),
        ('\u{abec}', '\u{abed}', Extend),
        ('\u{abf0}', '\u{abf9}', Numeric),
        ('\u{ac00}', '\u{d7a3}', ALetter),
        ('\u{d7b0}', '\u{d7c6}', ALetter),
        ('\u{d7cb}', '\u{d7fb}', ALetter),
        ('\u{fb00}', '\u{fb06}', ALetter),
        ('\u{fb13}', '\u{fb17}', ALetter),
        ('\u{fb1d}', '\u{fb1d}', HebrewLetter),
        ('\u{fb1e}', '\u{fb1e}', Extend),
        ('\u{fb1f}', '\u{fb28}', HebrewLetter),
        ('\u{fb2a}', '\u{fb36}', HebrewLetter),
        ('\u{fb38}', '\u{fb3c}', HebrewLetter),
        ('\u{fb3e}', '\u{fb3e}', HebrewLetter),
        ('\u{fb40}', '\u{fb41}', HebrewLetter),
        ('\u{fb43}', '\u{fb44}', HebrewLetter),
        ('\u{fb46}', '\u{fb4f}', HebrewLetter),
        ('\u{fb50}', '\u{fbb1}', ALetter),
        ('\u{fbd3}', '\u{fd3d}', ALetter),
        ('\u{fd50}', '\u{fd8f}', ALetter),
        ('\u{fd92}', '\u{fdc7}', ALetter),
        ('\u{fdf0}', '\u{fdfb}', ALetter),
        ('\u{fe00}', '\u{fe0f}', Extend),
        ('\u{fe13}', '\u{fe13}', MidLetter),
        ('\u{fe20}', '\u{fe2f}', Extend),
        ('\u{fe33}', '\u{fe34}', ExtendNumLet),
        ('\u{fe4d}', '\u{fe4f}', ExtendNumLet),
        ('\u{fe50}', '\u{fe50}', MidNum),
        ('\u{fe52}', '\u{fe52}', MidNumLet),
        ('\u{fe54}', '\u{fe54}', MidNum),
        ('\u{fe55}', '\u{fe55}', MidLetter),
        ('\u{fe70}', '\u{fe74}', ALetter),
        ('\u{fe76}', '\u{fefc}', ALetter),
        ('\u{feff}', '\u{feff}', Format),
        ('\u{ff07}', '\u{ff07}', MidNumLet),
        ('\u{ff0c}', '\u{ff0c}', MidNum),
        ('\u{ff0e}', '\u{ff0e}', MidNumLet),
        ('\u{ff10}', '\u{ff19}', Numeric),
        ('\u{ff1a}', '\u{ff1a}', MidLetter),
        ('\u{ff1b}', '\u{ff1b}', MidNum),
        ('\u{ff21}', '\u{ff3a}', ALetter),
        ('\u{ff3f}', '\u{ff3f}', ExtendNumLet),
        ('\u{ff41}', '\u{ff5a}', ALetter),
        ('\u{ff66}', '\u{ff9d}', Katakana),
        ('\u{ff9e}', '\u{ff9f}', Extend),
        ('\u{ffa0}', '\u{ffbe}', ALetter),
        ('\u{ffc2}', '\u{ffc7}', ALetter),
        ('\u{ffca}', '\u{ffcf}', ALetter),
        ('\u{ffd2}', '\u{ffd7}', ALetter),
        ('\u{ffda}', '\u{ffdc}', ALetter),
        ('\u{fff9}', '\u{fffb}', Format),
        ('\u{10000}', '\u{1000b}', ALetter),
        ('\u{1000d}', '\u{10026}', ALetter),
        ('\u{10028}', '\u{1003a}', ALetter),
        ('\u{1003c}', '\u{1003d}', ALetter),
        ('\u{1003f}', '\u{1004d}', ALetter),
        ('\u{10050}', '\u{1005d}', ALetter),
        ('\u{10080}', '\u{100fa}', ALetter),
        ('\u{10140}', '\u{10174}', ALetter),
        ('\u{101fd}', '\u{101fd}', Extend),
        ('\u{10280}', '\u{1029c}', ALetter),
        ('\u{102a0}', '\u{102d0}', ALetter),
        ('\u{102e0}', '\u{102e0}', Extend),
        ('\u{10300}', '\u{1031f}', ALetter),
        ('\u{1032d}', '\u{1034a}', ALetter),
        ('\u{10350}', '\u{10375}', ALetter),
        ('\u{10376}', '\u{1037a}', Extend),
        ('\u{10380}', '\u{1039d}', ALetter),
        ('\u{103a0}', '\u{103c3}', ALetter),
        ('\u{103c8}', '\u{103cf}', ALetter),
        ('\u{103d1}', '\u{103d5}', ALetter),
        ('\u{10400}', '\u{1049d}', ALetter),
        ('\u{104a0}', '\u{104a9}', Numeric),
        ('\u{104b0}', '\u{104d3}', ALetter),
        ('\u{104d8}', '\u{104fb}', ALetter),
        ('\u{10500}', '\u{10527}', ALetter),
        ('\u{10530}', '\u{10563}', ALetter),
        ('\u{10570}', '\u{1057a}', ALetter),
        ('\u{1057c}', '\u{1058a}', ALetter),
        ('\u{1058c}', '\u{10592}', ALetter),
        ('\u{10594}', '\u{10595}', ALetter),
        ('\u{10597}', '\u{105a1}', ALetter),
        ('\u{105a3}', '\u{105b1}', ALetter),
        ('\u{105b3}', '\u{105b9}', ALetter),
        ('\u{105bb}', '\u{105bc}', ALetter),
        ('\u{105c0}', '\u{105f3}', ALetter),
        ('\u{10600}', '\u{10736}', ALetter),
        ('\u{10740}', '\u{10755}', ALetter),
        ('\u{10760}', '\u{10767}', ALetter),
        ('\u{10780}', '\u{10785}', ALetter),
        ('\u{10787}', '\u{107b0}', ALetter),
        ('\u{107b2}', '\u{107ba}', ALetter),
        ('\u{10800}', '\u{10805}', ALetter),
        ('\u{10808}', '\u{10808}', ALetter),
        ('\u{1080a}', '\u{10835}', ALetter),
        ('\u{10837}', '\u{10838}', ALetter),
        ('\u{1083c}', '\u{1083c}', ALetter),
        ('\u{1083f}', '\u{10855}', ALetter),
        ('\u{10860}', '\u{10876}', ALetter),
        ('\u{10880}', '\u{1089e}', ALetter),
        ('\u{108e0}', '\u{108f2}', ALetter),
        ('\u{108f4}', '\u{108f5}', ALetter),
        ('\u{10900}', '\u{10915}', ALetter),
        ('\u{10920}', '\u{10939}', ALetter),
        ('\u{10980}', '\u{109b7}', ALetter),
        ('\u{109be}', '\u{109bf}', ALetter),
        ('\u{10a00}', '\u{10a00}', ALetter),
        ('\u{10a01}', '\u{10a03}', Extend),
        ('\u{10a05}', '\u{10a06}', Extend),
        ('\u{10a0c}', '\u{10a0f}', Extend),
        ('\u{10a10}', '\u{10a13}', ALetter),
        ('\u{10a15}', '\u{10a17}', ALetter),
        ('\u{10a19}', '\u{10a35}', ALetter),
        ('\u{10a38}', '\u{10a3a}', Extend),
        ('\u{10a3f}', '\u{10a3f}', Extend),
        ('\u{10a60}', '\u{10a7c}', ALetter),
        ('\u{10a80}', '\u{10a9c}', ALetter),
        ('\u{10ac0}', '\u{10ac7}', ALetter),
        ('\u{10ac9}', '\u{10ae4}', ALetter),
        ('\u{10ae5}', '\u{10ae6}', Extend),
        ('\u{10b00}', '\u{10b35}', ALetter),
        ('\u{10b40}', '\u{10b55}', ALetter),
        ('\u{10b60}', '\u{10b72}', ALetter),
        ('\u{10b80}', '\u{10b91}', ALetter),
        ('\u{10c00}', '\u{10c48}', ALetter),
        ('\u{10c80}', '\u{10cb2}', ALetter),
        ('\u{10cc0}', '\u{10cf2}', ALetter),
        ('\u{10d00}', '\u{10d23}', ALetter),
        ('\u{10d24}', '\u{10d27}', Extend),
        ('\u{10d30}', '\u{10d39}', Numeric),
        ('\u{10d40}', '\u{10d49}', Numeric),
        ('\u{10d4a}', '\u{10d65}', ALetter),
        ('\u{10d69}', '\u{10d6d}', Extend),
        ('\u{10d6f}', '\u{10d85}', ALetter),
        ('\u{10e80}', '\u{10ea9}', ALetter),
        ('\u{10eab}', '\u{10eac}', Extend),
        ('\u{10eb0}', '\u{10eb1}', ALetter),
        ('\u{10ec2}', '\u{10ec4}', ALetter),
        ('\u{10efc}', '\u{10eff}', Extend),
        ('\u{10f00}', '\u{10f1c}', ALetter),
        ('\u{10f27}', '\u{10f27}', ALetter),
        ('\u{10f30}', '\u{10f45}', ALetter),
        ('\u{10f46}', '\u{10f50}', Extend),
        ('\u{10f70}', '\u{10f81}', ALetter),
        ('\u{10f82}', '\u{10f85}', Extend),
        ('\u{10fb0}', '\u{10fc4}', ALetter),
        ('\u{10fe0}', '\u{10ff6}', ALetter),
        ('\u{11000}', '\u{11002}', Extend),
        ('\u{11003}', '\u{11037}', ALetter),
        ('\u{11038}', '\u{11046}', Extend),
        ('\u{11066}', '\u{1106f}', Numeric),
        ('\u{11070}', '\u{11070}', Extend),
        ('\u{11071}', '\u{11072}', ALetter),
        ('\u{11073}', '\u{11074}', Extend),
        ('\u{11075}', '\u{11075}', ALetter),
        ('\u{1107f}', '\u{11082}', Extend),
        ('\u{11083}', '\u{110af}', ALetter),
        ('\u{110b0}', '\u{110ba}', Extend),
        ('\u{110bd}', '\u{110bd}', Numeric),
        ('\u{110c2}', '\u{110c2}', Extend),
        ('\u{110cd}', '\u{110cd}', Numeric),
        ('\u{110d0}', '\u{110e8}', ALetter),
        ('\u{110f0}', '\u{110f9}', Numeric),
        ('\u{11100}', '\u{11102}', Extend),
        ('\u{11103}', '\u{11126}', ALetter),
        ('\u{11127}', '\u{11134}', Extend),
        ('\u{11136}', '\u{1113f}', Numeric),
        ('\u{11144}', '\u{11144}', ALetter),
        ('\u{11145}', '\u{11146}', Extend),
        ('\u{11147}', '\u{11147}', ALetter),
        ('\u{11150}', '\u{11172}', ALetter),
        ('\u{11173}', '\u{11173}', Extend),
        ('\u{11176}', '\u{11176}', ALetter),
        ('\u{11180}', '\u{11182}', Extend),
        ('\u{11183}', '\u{111b2}', ALetter),
        ('\u{111b3}', '\u{111c0}', Extend),
        ('\u{111c1}', '\u{111c4}', ALetter),
        ('\u{111c9}', '\u{111cc}', Extend),
        ('\u{111ce}', '\u{111cf}', Extend),
        ('\u{111d0}', '\u{111d9}', Numeric),
        ('\u{111da}', '\u{111da}', ALetter),
        ('\u{111dc}', '\u{111dc}', ALetter),
        ('\u{11200}', '\u{11211}', ALetter),
        ('\u{11213}', '\u{1122b}', ALetter),
        ('\u{1122c}', '\u{11237}', Extend),
        ('\u{1123e}', '\u{1123e}', Extend),
        ('\u{1123f}', '\u{11240}', ALetter),
        ('\u{11241}', '\u{11241}', Extend),
        ('\u{11280}', '\u{11286}', ALetter),
        ('\u{11288}', '\u{11288}', ALetter),
        ('\u{1128a}', '\u{1128d}', ALetter),
        ('\u{1128f}', '\u{1129d}', ALetter),
        ('\u{1129f}', '\u{112a8}', ALetter),
        ('\u{112b0}', '\u{112de}', ALetter),
        ('\u{112df}', '\u{112ea}', Extend),
        ('\u{112f0}', '\u{112f9}', Numeric),
        ('\u{11300}', '\u{11303}', Extend),
        ('\u{11305}', '\u{1130c}', ALetter),
        ('\u{1130f}', '\u{11310}', ALetter),
        ('\u{11313}', '\u{11328}', ALetter),
        ('\u{1132a}', '\u{11330}', ALetter),
        ('\u{11332}', '\u{11333}', ALetter),
        ('\u{11335}', '\u{11339}', ALetter),
        ('\u{1133b}', '\u{1133c}', Extend),
        ('\u{1133d}', '\u{1133d}', ALetter),
        ('\u{1133e}', '\u{11344}', Extend),
        ('\u{11347}', '\u{11348}', Extend),
        ('\u{1134b}', '\u{1134d}', Extend),
        ('\u{11350}', '\u{11350}', ALetter),
        ('\u{11357}', '\u{11357}', Extend),
        ('\u{1135d}', '\u{11361}', ALetter),
        ('\u{11362}', '\u{11363}', Extend),
        ('\u{11366}', '\u{1136c}', Extend),
        ('\u{11370}', '\u{11374}', Extend),
        ('\u{11380}', '\u{11389}', ALetter),
        ('\u{1138b}', '\u{1138b}', ALetter),
        ('\u{1138e}', '\u{1138e}', ALetter),
        ('\u{11390}', '\u{113b5}', ALetter),
        ('\u{113b7}', '\u{113b7}', ALetter),
        ('\u{113b8}', '\u{113c0}', Extend),
        ('\u{113c2}', '\u{113c2}', Extend),
        ('\u{113c5}', '\u{113c5}', Extend),
        ('\u{113c7}', '\u{113ca}', Extend),
        ('\u{113cc}', '\u{113d0}', Extend),
        ('\u{113d1}', '\u{113d1}', ALetter),
        ('\u{113d2}', '\u{113d2}', Extend),
        ('\u{113d3}', '\u{113d3}', ALetter),
        ('\u{113e1}', '\u{113e2}', Extend),
        ('\u{11400}', '\u{11434}', ALetter),
        ('\u{11435}', '\u{11446}', Extend),
        ('\u{11447}', '\u{1144a}', ALetter),
        ('\u{11450}', '\u{11459}', Numeric),
        ('\u{1145e}', '\u{1145e}', Extend),
        ('\u{1145f}', '\u{11461}', ALetter),
        ('\u{11480}', '\u{114af}', ALetter),
        ('\u{114b0}', '\u{114c3}', Extend),
        ('\u{114c4}', '\u{114c5}', ALetter),
        ('\u{114c7}', '\u{114c7}', ALetter),
        ('\u{114d0}', '\u{114d9}', Numeric),
        ('\u{11580}', '\u{115ae}', ALetter),
        ('\u{115af}', '\u{115b5}', Extend),
        ('\u{115b8}', '\u{115c0}', Extend),
        ('\u{115d8}', '\u{115db}', ALetter),
        ('\u{115dc}', '\u{115dd}', Extend),
        ('\u{11600}', '\u{1162f}', ALetter),
        ('\u{11630}', '\u{11640}', Extend),
        ('\u{11644}', '\u{11644}', ALetter),
        ('\u{11650}', '\u{11659}', Numeric),
        ('\u{11680}', '\u{116aa}', ALetter),
        ('\u{116ab}', '\u{116b7}', Extend),
        ('\u{116b8}', '\u{116b8}', ALetter),
        ('\u{116c0}', '\u{116c9}', Numeric),
        ('\u{116d0}', '\u{116e3}', Numeric),
        ('\u{1171d}', '\u{1172b}', Extend),
        ('\u{11730}', '\u{11739}', Numeric),
        ('\u{11800}', '\u{1182b}', ALetter),
        ('\u{1182c}', '\u{1183a}', Extend),
        ('\u{118a0}', '\u{118df}', ALetter),
        ('\u{118e0}', '\u{118e9}', Numeric),
        ('\u{118ff}', '\u{11906}', ALetter),
        ('\u{11909}', '\u{11909}', ALetter),
        ('\u{1190c}', '\u{11913}', ALetter),
        ('\u{11915}', '\u{11916}', ALetter),
        ('\u{11918}', '\u{1192f}', ALetter),
        ('\u{11930}', '\u{11935}', Extend),
        ('\u{11937}', '\u{11938}', Extend),
        ('\u{1193b}', '\u{1193e}', Extend),
        ('\u{1193f}', '\u{1193f}', ALetter),
        ('\u{11940}', '\u{11940}', Extend),
        ('\u{11941}', '\u{11941}', ALetter),
        ('\u{11942}', '\u{11943}', Extend),
        ('\u{11950}', '\u{11959}', Numeric),
        ('\u{119a0}', '\u{119a7}', ALetter),
        ('\u{119aa}', '\u{119d0}', ALetter),
        ('\u{119d1}', '\u{119d7}', Extend),
        ('\u{119da}', '\u{119e0}', Extend),
        ('\u{119e1}', '\u{119e1}', ALetter),
        ('\u{119e3}', '\u{119e3}', ALetter),
        ('\u{119e4}', '\u{119e4}', Extend),
        ('\u{11a00}', '\u{11a00}', ALetter),
        ('\u{11a01}', '\u{11a0a}', Extend),
        ('\u{11a0b}', '\u{11a32}', ALetter),
        ('\u{11a33}', '\u{11a39}', Extend),
        ('\u{11a3a}', '\u{11a3a}', ALetter),
        ('\u{11a3b}', '\u{11a3e}', Extend),
        ('\u{11a47}', '\u{11a47}', Extend),
        ('\u{11a50}', '\u{11a50}', ALetter),
        ('\u{11a51}', '\u{11a5b}', Extend),
        ('\u{11a5c}', '\u{11a89}', ALetter),
        ('\u{11a8a}', '\u{11a99}', Extend),
        ('\u{11a9d}', '\u{11a9d}', ALetter),
        ('\u{11ab0}', '\u{11af8}', ALetter),
        ('\u{11bc0}', '\u{11be0}', ALetter),
        ('\u{11bf0}', '\u{11bf9}', Numeric),
        ('\u{11c00}', '\u{11c08}', ALetter),
        ('\u{11c0a}', '\u{11c2e}', ALetter),
        ('\u{11c2f}', '\u{11c36}', Extend),
        ('\u{11c38}', '\u{11c3f}', Extend),
        ('\u{11c40}', '\u{11c40}', ALetter),
        ('\u{11c50}', '\u{11c59}', Numeric),
        ('\u{11c72}', '\u{11c8f}', ALetter),
        ('\u{11c92}', '\u{11ca7}', Extend),
        ('\u{11ca9}', '\u{11cb6}', Extend),
        ('\u{11d00}', '\u{11d06}', ALetter),
        ('\u{11d08}', '\u{11d09}', ALetter),
        ('\u{11d0b}', '\u{11d30}', ALetter),
        ('\u{11d31}', '\u{11d36}', Extend),
        ('\u{11d3a}', '\u{11d3a}', Extend),
        ('\u{11d3c}', '\u{11d3d}', Extend),
        ('\u{11d3f}', '\u{11d45}', Extend),
        ('\u{11d46}', '\u{11d46}', ALetter),
        ('\u{11d47}', '\u{11d47}', Extend),
        ('\u{11d50}', '\u{11d59}', Numeric),
        ('\u{11d60}', '\u{11d65}', ALetter),
        ('\u{11d67}', '\u{11d68}', ALetter),
        ('\u{11d6a}', '\u{11d89}', ALetter),
        ('\u{11d8a}', '\u{11d8e}', Extend),
        ('\u{11d90}', '\u{11d91}', Extend),
        ('\u{11d93}', '\u{11d97}', Extend),
        ('\u{11d98}', '\u{11d98}', ALetter),
        ('\u{11da0}', '\u{11da9}', Numeric),
        ('\u{11ee0}', '\u{11ef2}', ALetter),
        ('\u{11ef3}', '\u{11ef6}', Extend),
        ('\u{11f00}', '\u{11f01}', Extend),
        ('\u{11f02}', '\u{11f02}', ALetter),
        ('\u{11f03}', '\u{11f03}', Extend),
        ('\u{11f04}', '\u{11f10}', ALetter),
        ('\u{11f12}', '\u{11f33}', ALetter),
        ('\u{11f34}', '\u{11f3a}', Extend),
        ('\u{11f3e}', '\u{11f42}', Extend),
        ('\u{11f50}', '\u{11f59}', Numeric),
        ('\u{11f5a}', '\u{11f5a}', Extend),
        ('\u{11fb0}', '\u{11fb0}', ALetter),
        ('\u{12000}', '\u{12399}', ALetter),
        ('\u{12400}', '\u{1246e}', ALetter),
        ('\u{12480}', '\u{12543}', ALetter),
        ('\u{12f90}', '\u{12ff0}', ALetter),
        ('\u{13000}', '\u{1342f}', ALetter),
        ('\u{13430}', '\u{1343f}', Format),
        ('\u{13440}', '\u{13440}', Extend),
        ('\u{13441}', '\u{13446}', ALetter),
        ('\u{13447}', '\u{13455}', Extend),
        ('\u{13460}', '\u{143fa}', ALetter),
        ('\u{14400}', '\u{14646}', ALetter),
        ('\u{16100}', '\u{1611d}', ALetter),
        ('\u{1611e}', '\u{1612f}', Extend),
        ('\u{16130}', '\u{16139}', Numeric),
        ('\u{16800}', '\u{16a38}', ALetter),
        ('\u{16a40}', '\u{16a5e}', ALetter),
        ('\u{16a60}', '\u{16a69}', Numeric),
        ('\u{16a70}', '\u{16abe}', ALetter),
        ('\u{16ac0}', '\u{16ac9}', Numeric),
        ('\u{16ad0}', '\u{16aed}', ALetter),
        ('\u{16af0}', '\u{16af4}', Extend),
        ('\u{16b00}', '\u{16b2f}', ALetter),
        ('\u{16b30}', '\u{16b36}', Extend),
        ('\u{16b40}', '\u{16b43}', ALetter),
        ('\u{16b50}', '\u{16b59}', Numeric),
        ('\u{16b63}', '\u{16b77}', ALetter),
        ('\u{16b7d}', '\u{16b8f}', ALetter),
        ('\u{16d40}', '\u{16d6c}', ALetter),
        ('\u{16d70}', '\u{16d79}', Numeric),
        ('\u{16e40}', '\u{16e7f}', ALetter),
        ('\u{16f00}', '\u{16f4a}', ALetter),
        ('\u{16f4f}', '\u{16f4f}', Extend),
        ('\u{16f50}', '\u{16f50}', ALetter),
        ('\u{16f51}', '\u{16f87}', Extend),
        ('\u{16f8f}', '\u{16f92}', Extend),
        ('\u{16f93}', '\u{16f9f}', ALetter),
        ('\u{16fe0}', '\u{16fe1}', ALetter),
        ('\u{16fe3}', '\u{16fe3}', ALetter),
        ('\u{16fe4}', '\u{16fe4}', Extend),
        ('\u{16ff0}', '\u{16ff1}', Extend),
        ('\u{1aff0}', '\u{1aff3}', Katakana),
        ('\u{1aff5}', '\u{1affb}', Katakana),
        ('\u{1affd}', '\u{1affe}', Katakana),
        ('\u{1b000}', '\u{1b000}', Katakana),
        ('\u{1b120}', '\u{1b122}', Katakana),
        ('\u{1b155}', '\u{1b155}', Katakana),
        ('\u{1b164}', '\u{1b167}', Katakana),
        ('\u{1bc00}', '\u{1bc6a}', ALetter),
        ('\u{1bc70}', '\u{1bc7c}', ALetter),
        ('\u{1bc80}', '\u{1bc88}', ALetter),
        ('\u{1bc90}', '\u{1bc99}', ALetter),
        ('\u{1bc9d}', '\u{1bc9e}', Extend),
        ('\u{1bca0}', '\u{1bca3}', Format),
        ('\u{1ccf0}', '\u{1ccf9}', Numeric),
        ('\u{1cf00}', '\u{1cf2d}', Extend),
        ('\u{1cf30}', '\u{1cf46}', Extend),
        ('\u{1d165}', '\u{1d169}', Extend),
        ('\u{1d16d}', '\u{1d172}', Extend),
        ('\u{1d173}', '\u{1d17a}', Format),
        ('\u{1d17b}', '\u{1d182}', Extend),
        ('\u{1d185}', '\u{1d18b}', Extend),
        ('\u{1d1aa}', '\u{1d1ad}', Extend),
        ('\u{1d242}', '\u{1d244}', Extend),
        ('\u{1d400}', '\u{1d454}', ALetter),
        ('\u{1d456}', '\u{1d49c}', ALetter),
        ('\u{1d49e}', '\u{1d49f}', ALetter),
        ('\u{1d4a2}', '\u{1d4a2}', ALetter),
        ('\u{1d4a5}', '\u{1d4a6}', ALetter),
        ('\u{1d4a9}', '\u{1d4ac}', ALetter),
        ('\u{1d4ae}', '\u{1d4b9}', ALetter),
        ('\u{1d4bb}', '\u{1d4bb}', ALetter),
        ('\u{1d4bd}', '\u{1d4c3}', ALetter),
        ('\u{1d4c5}', '\u{1d505}', ALetter),
        ('\u{1d507}', '\u{1d50a}', ALetter),
        ('\u{1d50d}', '\u{1d514}', ALetter),
        ('\u{1d516}', '\u{1d51c}', ALetter),
        ('\u{1d51e}', '\u{1d539}', ALetter),
        ('\u{1d53b}', '\u{1d53e}', ALetter),
        ('\u{1d540}', '\u{1d544}', ALetter),
        ('\u{1d546}', '\u{1d546}', ALetter),
        ('\u{1d54a}', '\u{1d550}', ALetter),
        ('\u{1d552}', '\u{1d6a5}', ALetter),
        ('\u{1d6a8}', '\u{1d6c0}', ALetter),
        ('\u{1d6c2}', '\u{1d6da}', ALetter),
        ('\u{1d6dc}', '\u{1d6fa}', ALetter),
        ('\u{1d6fc}', '\u{1d714}', ALetter),
        ('\u{1d716}', '\u{1d734}', ALetter),
        ('\u{1d736}', '\u{1d74e}', ALetter),
        ('\u{1d750}', '\u{1d76e}', ALetter),
        ('\u{1d770}', '\u{1d788}', ALetter),
        ('\u{1d78a}', '\u{1d7a8}', ALetter),
        ('\u{1d7aa}', '\u{1d7c2}', ALetter),
        ('\u{1d7c4}', '\u{1d7cb}', ALetter),
        ('\u{1d7ce}', '\u{1d7ff}', Numeric),
        ('\u{1da00}', '\u{1da36}', Extend),
        ('\u{1da3b}', '\u{1da6c}', Extend),
        ('\u{1da75}', '\u{1da75}', Extend),
        ('\u{1da84}', '\u{1da84}', Extend),
        ('\u{1da9b}', '\u{1da9f}', Extend),
        ('\u{1daa1}', '\u{1daaf}', Extend),
        ('\u{1df00}', '\u{1df1e}', ALetter),
        ('\u{1df25}', '\u{1df2a}', ALetter),
        ('\u{1e000}', '\u{1e006}', Extend),
        ('\u{1e008}', '\u{1e018}', Extend),
        ('\u{1e01b}', '\u{1e021}', Extend),
        ('\u{1e023}', '\u{1e024}', Extend),
        ('\u{1e026}', '\u{1e02a}', Extend),
        ('\u{1e030}', '\u{1e06d}', ALetter),
        ('\u{1e08f}', '\u{1e08f}', Extend),
        ('\u{1e100}', '\u{1e12c}', ALetter),
        ('\u{1e130}', '\u{1e136}', Extend),
        ('\u{1e137}', '\u{1e13d}', ALetter),
        ('\u{1e140}', '\u{1e149}', Numeric),
        ('\u{1e14e}', '\u{1e14e}', ALetter),
        ('\u{1e290}', '\u{1e2ad}', ALetter),
        ('\u{1e2ae}', '\u{1e2ae}', Extend),
        ('\u{1e2c0}', '\u{1e2eb}', ALetter),
        ('\u{1e2ec}', '\u{1e2ef}', Extend),
        ('\u{1e2f0}', '\u{1e2f9}', Numeric),
        ('\u{1e4d0}', '\u{1e4eb}', ALetter),
        ('\u{1e4ec}', '\u{1e4ef}', Extend),
        ('\u{1e4f0}', '\u{1e4f9}', Numeric),
        ('\u{1e5d0}', '\u{1e5ed}', ALetter),
        ('\u{1e5ee}', '\u{1e5ef}', Extend),
        ('\u{1e5f0}', '\u{1e5f0}', ALetter),
        ('\u{1e5f1}', '\u{1e5fa}', Numeric),
        ('\u{1e7e0}', '\u{1e7e6}', ALetter),
        ('\u{1e7e8}', '\u{1e7eb}', ALetter),
        ('\u{1e7ed}', '\u{1e7ee}', ALetter),
        ('\u{1e7f0}', '\u{1e7fe}', ALetter),
        ('\u{1e800}', '\u{1e8c4}', ALetter),
        ('\u{1e8d0}', '\u{1e8d6}', Extend),
        ('\u{1e900}', '\u{1e943}', ALetter),
        ('\u{1e944}', '\u{1e94a}', Extend),
        ('\u{1e94b}', '\u{1e94b}', ALetter),
        ('\u{1e950}', '\u{1e959}', Numeric),
        ('\u{1ee00}', '\u{1ee03}', ALetter),
        ('\u{1ee05}', '\u{1ee1f}', ALetter),
        ('\u{1ee21}', '\u{1ee22}', ALetter),
        ('\u{1ee24}', '\u{1ee24}', ALetter),
        ('\u{1ee27}', '\u{1ee27}', ALetter),
        ('\u{1ee29}', '\u{1ee32}', ALetter),
        ('\u{1ee34}', '\u{1ee37}', ALetter),
        ('\u{1ee39}', '\u{1ee39}', ALetter),
        ('\u{1ee3b}', '\u{1ee3b}', ALetter),
        ('\u{1ee42}', '\u{1ee42}', ALetter),
        ('\u{1ee47}', '\u{1ee47}', ALetter),
        ('\u{1ee49}', '\u{1ee49}', ALetter),
        ('\u{1ee4b}', '\u{1ee4b}', ALetter),
        ('\u{1ee4d}', '\u{1ee4f}', ALetter),
        ('\u{1ee51}', '\u{1ee52}', ALetter),
        ('\u{1ee54}', '\u{1ee54}', ALetter),
        ('\u{1ee57}', '\u{1ee57}', ALetter),
        ('\u{1ee59}', '\u{1ee59}', ALetter),
        ('\u{1ee5b}', '\u{1ee5b}', ALetter),
        ('\u{1ee5d}', '\u{1ee5d}', ALetter),
        ('\u{1ee5f}', '\u{1ee5f}', ALetter),
        ('\u{1ee61}', '\u{1ee62}', ALetter),
        ('\u{1ee64}', '\u{1ee64}', ALetter),
        ('\u{1ee67}', '\u{1ee6a}', ALetter),
        ('\u{1ee6c}', '\u{1ee72}', ALetter),
        ('\u{1ee74}', '\u{1ee77}', ALetter),
        ('\u{1ee79}', '\u{1ee7c}', ALetter),
        ('\u{1ee7e}', '\u{1ee7e}', ALetter),
        ('\u{1ee80}', '\u{1ee89}', ALetter),
        ('\u{1ee8b}', '\u{1ee9b}', ALetter),
        ('\u{1eea1}', '\u{1eea3}', ALetter),
        ('\u{1eea5}', '\u{1eea9}', ALetter),
        ('\u{1eeab}', '\u{1eebb}', ALetter),
        ('\u{1f130}', '\u{1f149}', ALetter),
        ('\u{1f150}', '\u{1f169}', ALetter),
        ('\u{1f170}', '\u{1f189}', ALetter),
        ('\u{1f1e6}', '\u{1f1ff}', RegionalIndicator),
        ('\u{1f3fb}', '\u{1f3ff}', Extend),
        ('\u{1fbf0}', '\u{1fbf9}', Numeric),
        ('\u{e0001}', '\u{e0001}', Format),
        ('\u{e0020}', '\u{e007f}', Extend),
        ('\u{e0100}', '\u{e01ef}', Extend),
    ];
}

pub(crate) mod emoji {
    pub(crate) const EXTENDED_PICTOGRAPHIC_TABLE: &[(char, char)] = &[
        ('\u{a9}', '\u{a9}'),
        ('\u{ae}', '\u{ae}'),
        ('\u{203c}', '\u{203c}'),
        ('\u{2049}', '\u{2049}'),
        ('\u{2122}', '\u{2122}'),
        ('\u{2139}', '\u{2139}'),
        ('\u{2194}', '\u{2199}'),
        ('\u{21a9}', '\u{21aa}'),
        ('\u{231a}', '\u{231b}'),
        ('\u{2328}', '\u{2328}'),
        ('\u{2388}', '\u{2388}'),
        ('\u{23cf}', '\u{23cf}'),
        ('\u{23e9}', '\u{23f3}'),
        ('\u{23f8}', '\u{23fa}'),
        ('\u{24c2}', '\u{24c2}'),
        ('\u{25aa}', '\u{25ab}'),
        ('\u{25b6}', '\u{25b6}'),
        ('\u{25c0}', '\u{25c0}'),
        ('\u{25fb}', '\u{25fe}'),
        ('\u{2600}', '\u{2605}'),
        ('\u{2607}', '\u{2612}'),
        ('\u{2614}', '\u{2685}'),
        ('\u{2690}', '\u{2705}'),
        ('\u{2708}', '\u{2712}'),
        ('\u{2714}', '\u{2714}'),
        ('\u{2716}', '\u{2716}'),
        ('\u{271d}', '\u{271d}'),
        ('\u{2721}', '\u{2721}'),
        ('\u{2728}', '\u{2728}'),
        ('\u{2733}', '\u{2734}'),
        ('\u{2744}', '\u{2744}'),
        ('\u{2747}', '\u{2747}'),
        ('\u{274c}', '\u{274c}'),
        ('\u{274e}', '\u{274e}'),
        ('\u{2753}', '\u{2755}'),
        ('\u{2757}', '\u{2757}'),
        ('\u{2763}', '\u{2767}'),
        ('\u{2795}', '\u{2797}'),
        ('\u{27a1}', '\u{27a1}'),
        ('\u{27b0}', '\u{27b0}'),
        ('\u{27bf}', '\u{27bf}'),
        ('\u{2934}', '\u{2935}'),
        ('\u{2b05}', '\u{2b07}'),
        ('\u{2b1b}', '\u{2b1c}'),
        ('\u{2b50}', '\u{2b50}'),
        ('\u{2b55}', '\u{2b55}'),
        ('\u{3030}', '\u{3030}'),
        ('\u{303d}', '\u{303d}'),
        ('\u{3297}', '\u{3297}'),
        ('\u{3299}', '\u{3299}'),
        ('\u{1f000}', '\u{1f0ff}'),
        ('\u{1f10d}', '\u{1f10f}'),
        ('\u{1f12f}', '\u{1f12f}'),
        ('\u{1f16c}', '\u{1f171}'),
        ('\u{1f17e}', '\u{1f17f}'),
        ('\u{1f18e}', '\u{1f18e}'),
        ('\u{1f191}', '\u{1f19a}'),
        ('\u{1f1ad}', '\u{1f1e5}'),
        ('\u{1f201}', '\u{1f20f}'),
        ('\u{1f21a}', '\u{1f21a}'),
        ('\u{1f22f}', '\u{1f22f}'),
        ('\u{1f232}', '\u{1f23a}'),
        ('\u{1f23c}', '\u{1f23f}'),
        ('\u{1f249}', '\u{1f3fa}'),
        ('\u{1f400}', '\u{1f53d}'),
        ('\u{1f546}', '\u{1f64f}'),
        ('\u{1f680}', '\u{1f6ff}'),
        ('\u{1f774}', '\u{1f77f}'),
        ('\u{1f7d5}', '\u{1f7ff}'),
        ('\u{1f80c}', '\u{1f80f}'),
        ('\u{1f848}', '\u{1f84f}'),
        ('\u{1f85a}', '\u{1f85f}'),
        ('\u{1f888}', '\u{1f88f}'),
        ('\u{1f8ae}', '\u{1f8ff}'),
        ('\u{1f90c}', '\u{1f93a}'),
        ('\u{1f93c}', '\u{1f945}'),
        ('\u{1f947}', '\u{1faff}'),
        ('\u{1fc00}', '\u{1fffd}'),
    ];
}
